//! Option exercise style definitions.

/// When an option may be exercised.
///
/// # Examples
/// ```
/// use pricer_models::instruments::ExerciseStyle;
///
/// assert!(ExerciseStyle::American.allows_early_exercise());
/// assert!(!ExerciseStyle::European.allows_early_exercise());
/// assert_eq!("american".parse::<ExerciseStyle>().unwrap(), ExerciseStyle::American);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExerciseStyle {
    /// Exercise only at expiry.
    #[default]
    European,

    /// Exercise at any time up to expiry.
    American,
}

impl ExerciseStyle {
    /// Returns `true` for European exercise.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }

    /// Returns `true` for American exercise.
    #[inline]
    pub fn is_american(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }

    /// Returns `true` if the holder may exercise before expiry.
    #[inline]
    pub fn allows_early_exercise(&self) -> bool {
        self.is_american()
    }

    /// Lower-case display name.
    pub fn name(&self) -> &'static str {
        match self {
            ExerciseStyle::European => "european",
            ExerciseStyle::American => "american",
        }
    }
}

impl std::fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ExerciseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "european" | "eu" => Ok(ExerciseStyle::European),
            "american" | "am" => Ok(ExerciseStyle::American),
            other => Err(format!("unknown exercise style '{}'", other)),
        }
    }
}
