// 💷 Rough Tax Lookup
// Flat rate + fixed surcharge per country. Not rounded.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Country {
    Uk,
    Fr,
    Other,
}

impl Country {
    pub fn rate(&self) -> f64 {
        match self {
            Country::Uk => 0.20,
            Country::Fr => 0.19,
            Country::Other => 0.15,
        }
    }

    pub fn surcharge(&self) -> f64 {
        match self {
            Country::Uk => 0.0,
            Country::Fr => 3.0,
            Country::Other => 0.0,
        }
    }

    /// `gross * rate + surcharge`
    pub fn calculate_tax(&self, gross: f64) -> f64 {
        gross * self.rate() + self.surcharge()
    }

    /// Translate a country code; unknown or missing codes fall back to `Other`
    pub fn from_code(code: Option<&str>) -> Country {
        match code.map(|c| c.trim().to_uppercase()).as_deref() {
            Some("UK") => Country::Uk,
            Some("FR") => Country::Fr,
            _ => Country::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_from_code() {
        assert_eq!(Country::from_code(Some("UK")), Country::Uk);
        assert_eq!(Country::from_code(Some("fr")), Country::Fr);
        assert_eq!(Country::from_code(Some("DE")), Country::Other);
        assert_eq!(Country::from_code(Some("")), Country::Other);
        assert_eq!(Country::from_code(None), Country::Other);
    }

    #[test]
    fn test_calculate_tax() {
        assert!((Country::Uk.calculate_tax(100.0) - 20.0).abs() < EPSILON);
        assert!((Country::Fr.calculate_tax(100.0) - 22.0).abs() < EPSILON);
        assert!((Country::Other.calculate_tax(100.0) - 15.0).abs() < EPSILON);
    }

    #[test]
    fn test_surcharge_applies_to_zero_gross() {
        assert_eq!(Country::Fr.calculate_tax(0.0), 3.0);
        assert_eq!(Country::Uk.calculate_tax(0.0), 0.0);
    }
}
