use proc_macro::TokenStream;

/// First wavelength of the generated CIE table, in nanometres
const CIE_LAMBDA_START: usize = 360;

/// Last wavelength of the generated CIE table, in nanometres
const CIE_LAMBDA_END: usize = 830;

/// Generate one column of the CIE 1931 2° standard observer table at 1nm
/// steps over 360..=830nm, 471 rows.  Should be used through
/// [`data::cie`], not this proc_macro.
///
/// Accepts one of `lambda`, `x`, `y` or `z` and expands to an array literal
/// of `f64` values for that column.
#[proc_macro]
pub fn cie_1931(item: TokenStream) -> TokenStream {
    let column = item
        .into_iter()
        .next()
        .expect("Expected column name, one of lambda, x, y or z")
        .to_string();

    let function: fn(f64) -> f64 = match column.as_str() {
        "lambda" => |lambda| lambda,
        "x" => x_fit_1931,
        "y" => y_fit_1931,
        "z" => z_fit_1931,
        other => panic!("Unknown CIE column `{}`, expected lambda, x, y or z", other),
    };

    let values = (CIE_LAMBDA_START..=CIE_LAMBDA_END)
        .map(|lambda| function(lambda as f64))
        .collect::<Vec<f64>>();

    format!("{:?}", values).parse().unwrap()
}

/// Piecewise gaussian with a different width either side of the centre
fn lobe(lambda: f64, centre: f64, low: f64, high: f64) -> f64 {
    let t = (lambda - centre) * if lambda < centre { low } else { high };
    (-0.5 * t * t).exp()
}

// Multi-lobe fits from "Simple Analytic Approximations to the CIE XYZ Color
// Matching Functions", Wyman, Sloan and Shirley.

fn x_fit_1931(lambda: f64) -> f64 {
    1.056 * lobe(lambda, 599.8, 0.0264, 0.0323) + 0.362 * lobe(lambda, 442.0, 0.0624, 0.0374)
        - 0.065 * lobe(lambda, 501.1, 0.0490, 0.0382)
}

fn y_fit_1931(lambda: f64) -> f64 {
    0.821 * lobe(lambda, 568.8, 0.0213, 0.0247) + 0.286 * lobe(lambda, 530.9, 0.0613, 0.0322)
}

fn z_fit_1931(lambda: f64) -> f64 {
    1.217 * lobe(lambda, 437.0, 0.0845, 0.0278) + 0.681 * lobe(lambda, 459.0, 0.0385, 0.0725)
}
