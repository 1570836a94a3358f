use std::str::FromStr;

use numeric::Float;

/// One `wavelength:value` pair given on the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub lambda: Float,
    pub value: Float,
}

impl FromStr for Sample {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lambda, value) = s
            .split_once(':')
            .ok_or_else(|| format!("expected `wavelength:value`, found `{}`", s))?;

        let parse = |part: &str, name: &str| {
            part.trim()
                .parse::<Float>()
                .map_err(|e| format!("invalid {} `{}`: {}", name, part, e))
        };

        Ok(Sample {
            lambda: parse(lambda, "wavelength")?,
            value: parse(value, "value")?,
        })
    }
}

#[cfg(test)]
#[test]
fn parse_samples() {
    assert_eq!(
        "550:0.25".parse::<Sample>(),
        Ok(Sample {
            lambda: 550.0,
            value: 0.25
        })
    );
    assert_eq!(
        " 400.5 : 1e-2".parse::<Sample>(),
        Ok(Sample {
            lambda: 400.5,
            value: 0.01
        })
    );
    assert!("550".parse::<Sample>().is_err());
    assert!("550:bright".parse::<Sample>().is_err());
}
