use std::fmt;

/// Technology Readiness Level
///
/// # Invariants
/// - Always within 1..=9
/// - Is immutable after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TrlLevel(i32);

impl TrlLevel {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 9;

    /// Creates a new TrlLevel
    ///
    /// # Returns
    /// * `Ok(TrlLevel)` - If level is within 1..=9
    /// * `Err(String)` - Otherwise
    ///
    /// # Example
    /// ```
    /// use blackturtle_api::domain::technology::TrlLevel;
    ///
    /// let trl = TrlLevel::new(6).expect("valid level");
    /// assert_eq!(trl.value(), 6);
    /// assert!(TrlLevel::new(10).is_err());
    /// ```
    pub fn new(level: i32) -> Result<Self, String> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(TrlLevel(level))
        } else {
            Err(format!(
                "TRL level must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                level
            ))
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for TrlLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TRL {}", self.0)
    }
}
