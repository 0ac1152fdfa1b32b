use super::model::Product;

/// Options for [`format_price_cop`].
#[derive(Debug, Clone, Copy)]
pub struct PriceFormat {
    pub show_currency: bool,
    pub decimals: usize,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            show_currency: true,
            decimals: 0,
        }
    }
}

/// Rounds a money amount to whole cents, the precision prices are stored at.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Returns true if the product carries a promotional price below its base price.
pub fn has_discount(product: &Product) -> bool {
    product
        .discount_price
        .is_some_and(|discount| discount < product.price)
}

/// The price a customer pays for one unit.
pub fn effective_price(product: &Product) -> f64 {
    match product.discount_price {
        Some(discount) if has_discount(product) && discount > 0.0 => discount,
        _ => product.price,
    }
}

/// Percentage saved by the discount, rounded to the nearest whole percent.
///
/// Returns `None` when there is no usable discount.
pub fn discount_percentage(price: f64, discount_price: Option<f64>) -> Option<u32> {
    let discount = discount_price?;
    if !(price.is_finite() && discount.is_finite()) || discount <= 0.0 || discount >= price {
        return None;
    }

    let percent = ((price - discount) / price * 100.0).round();
    Some(percent as u32)
}

/// Formats a price in Colombian pesos: `.` groups thousands, `,` separates decimals.
///
/// Missing or non-finite prices render as zero.
///
/// ```
/// use business::domain::product::pricing::{PriceFormat, format_price_cop};
///
/// assert_eq!(format_price_cop(Some(50000.0), PriceFormat::default()), "$ 50.000");
/// ```
pub fn format_price_cop(price: Option<f64>, format: PriceFormat) -> String {
    let value = match price {
        Some(p) if p.is_finite() => p,
        _ => {
            return if format.show_currency {
                "$ 0".to_string()
            } else {
                "0".to_string()
            };
        }
    };

    let rounded = format!("{:.*}", format.decimals, value.abs());
    let (integer, fraction) = match rounded.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rounded.as_str(), None),
    };

    let mut formatted = String::with_capacity(rounded.len() + integer.len() / 3 + 1);
    let negative = value < 0.0 && rounded.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    if negative {
        formatted.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(digit);
    }
    if let Some(fraction) = fraction {
        formatted.push(',');
        formatted.push_str(fraction);
    }

    if format.show_currency {
        format!("$ {formatted}")
    } else {
        formatted
    }
}
