use rust_decimal::Decimal;

use super::Sex;

/// Weight class value used for the unlimited (super-heavyweight) class.
pub const UNLIMITED_CLASS: i32 = 999;

pub const WEIGHT_CLASS_MALE: [i32; 9] = [53, 59, 66, 74, 83, 93, 105, 120, UNLIMITED_CLASS];
pub const WEIGHT_CLASS_FEMALE: [i32; 9] = [43, 47, 52, 57, 63, 69, 76, 84, UNLIMITED_CLASS];

/// Returns the `(lower, upper]` bodyweight band of a class, or `None` when the
/// class is not part of the ladder for `sex`.
///
/// The lightest class starts at 0 kg.
pub fn bodyweight_band(sex: Sex, weight_class: i32) -> Option<(Decimal, Decimal)> {
    let classes = sex.weight_classes();
    let index = classes.iter().position(|&c| c == weight_class)?;

    let lower = match index {
        0 => Decimal::ZERO,
        i => Decimal::from(classes[i - 1]),
    };

    Some((lower, Decimal::from(weight_class)))
}

pub fn is_valid_bodyweight(bodyweight: Option<Decimal>, weight_class: i32, sex: Sex) -> bool {
    let Some(bodyweight) = bodyweight else {
        return false;
    };

    match bodyweight_band(sex, weight_class) {
        Some((lower, upper)) => bodyweight > lower && bodyweight <= upper,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kg(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    #[test]
    fn test_band_is_open_below_and_closed_above() {
        assert!(is_valid_bodyweight(Some(kg(93, 0)), 93, Sex::Male));
        assert!(is_valid_bodyweight(Some(kg(8301, 2)), 93, Sex::Male));
        assert!(!is_valid_bodyweight(Some(kg(83, 0)), 93, Sex::Male));
        assert!(!is_valid_bodyweight(Some(kg(9301, 2)), 93, Sex::Male));
    }

    #[test]
    fn test_lightest_class_starts_at_zero() {
        assert_eq!(bodyweight_band(Sex::Female, 43), Some((Decimal::ZERO, kg(43, 0))));
        assert!(is_valid_bodyweight(Some(kg(401, 1)), 43, Sex::Female));
        assert!(!is_valid_bodyweight(Some(Decimal::ZERO), 43, Sex::Female));
    }

    #[test]
    fn test_unknown_class_or_missing_bodyweight_is_invalid() {
        assert!(!is_valid_bodyweight(Some(kg(60, 0)), 60, Sex::Male));
        assert!(!is_valid_bodyweight(Some(kg(50, 0)), 53, Sex::Female));
        assert!(!is_valid_bodyweight(None, 93, Sex::Male));
    }

    #[test]
    fn test_unlimited_class_band() {
        assert!(is_valid_bodyweight(Some(kg(180, 0)), UNLIMITED_CLASS, Sex::Male));
        assert!(!is_valid_bodyweight(Some(kg(120, 0)), UNLIMITED_CLASS, Sex::Male));
    }
}
