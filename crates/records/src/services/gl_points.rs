use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::Sex;

/// IPF GL (Glossbrenner-Linear) coefficient set for one sex.
///
/// Formula: GL = Total × 100 / (A - B · e^(-C · BW))
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlCoefficients {
    pub a: Decimal,
    pub b: Decimal,
    pub c: Decimal,
}

impl GlCoefficients {
    pub fn for_sex(sex: Sex) -> Self {
        match sex {
            Sex::Male => Self {
                a: Decimal::new(119_972_839, 5),
                b: Decimal::new(102_518_162, 5),
                c: Decimal::new(9_210, 6),
            },
            Sex::Female => Self {
                a: Decimal::new(61_032_796, 5),
                b: Decimal::new(104_559_282, 5),
                c: Decimal::new(3_048, 5),
            },
        }
    }
}

/// GL points of a total at a bodyweight, unrounded.
///
/// Returns `None` when the bodyweight is so low that the denominator is not
/// positive.
pub fn gl_points(total: Decimal, bodyweight: Decimal, sex: Sex) -> Option<Decimal> {
    let coefficients = GlCoefficients::for_sex(sex);

    let exp_term = decimal_exp(-coefficients.c * bodyweight)?;
    let denominator = coefficients.a - coefficients.b * exp_term;

    if denominator <= Decimal::ZERO {
        return None;
    }

    (total * Decimal::ONE_HUNDRED).checked_div(denominator)
}

/// Optional-aware wrapper used when resolving results.
pub fn gl_points_for(
    total: Option<Decimal>,
    bodyweight: Option<Decimal>,
    sex: Sex,
) -> Option<Decimal> {
    gl_points(total?, bodyweight?, sex)
}

fn decimal_exp(x: Decimal) -> Option<Decimal> {
    Decimal::from_f64_retain(x.to_f64()?.exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kg(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    #[test]
    fn test_known_male_score() {
        // 700 kg at 93 kg bodyweight scores roughly 91.6 GL.
        let score = gl_points(kg(700, 0), kg(93, 0), Sex::Male).unwrap();
        assert!(score > kg(914, 1) && score < kg(918, 1), "got {score}");
    }

    #[test]
    fn test_known_female_score() {
        // 400 kg at 63 kg bodyweight scores roughly 87.5 GL.
        let score = gl_points(kg(400, 0), kg(63, 0), Sex::Female).unwrap();
        assert!(score > kg(873, 1) && score < kg(877, 1), "got {score}");
    }

    #[test]
    fn test_strictly_increasing_in_total() {
        let bodyweight = kg(8255, 2);
        for sex in Sex::ALL {
            let mut previous = gl_points(kg(100, 0), bodyweight, sex).unwrap();
            for total in (10_001..10_200).map(|v| kg(v, 2)) {
                let score = gl_points(total, bodyweight, sex).unwrap();
                assert!(score > previous, "{sex}: {total} did not increase");
                previous = score;
            }
        }
    }

    #[test]
    fn test_missing_inputs_yield_none() {
        assert_eq!(gl_points_for(None, Some(kg(80, 0)), Sex::Male), None);
        assert_eq!(gl_points_for(Some(kg(500, 0)), None, Sex::Male), None);
        assert!(gl_points_for(Some(kg(500, 0)), Some(kg(80, 0)), Sex::Male).is_some());
    }

    #[test]
    fn test_degenerate_bodyweight_yields_none() {
        assert_eq!(gl_points(kg(100, 0), kg(5, 0), Sex::Female), None);
    }
}
