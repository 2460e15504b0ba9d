use crate::errors::InputIssue;
use crate::models::{NewOffer, OfferForm};

/// Builds the add payload from the raw form. Numeric fields that do not parse
/// are still sent (as `null`) and reported back as issues.
pub fn build_new_offer(form: &OfferForm) -> (NewOffer, Vec<InputIssue>) {
    let mut issues = Vec::new();

    let price = parse_float(&form.price);
    if price.is_nan() {
        issues.push(InputIssue::new("price", &form.price));
    }
    let rating = parse_float(&form.rating);
    if rating.is_nan() {
        issues.push(InputIssue::new("rating", &form.rating));
    }
    let num_reviews = parse_int(&form.num_reviews);
    if num_reviews.is_none() {
        issues.push(InputIssue::new("numReviews", &form.num_reviews));
    }

    let offer = NewOffer {
        upc: form.upc.clone(),
        name: form.name.clone(),
        party_name: form.party_name.clone(),
        semantic_name: form.semantic_name.clone(),
        main_image_file_url: form.main_image_file_url.clone(),
        party_image_file_url: form.party_image_file_url.clone(),
        product_category: form.product_category.clone(),
        price,
        rating,
        num_reviews,
    };

    (offer, issues)
}

/// Leading-float parse: the longest decimal prefix after leading whitespace,
/// or NaN when there is none.
pub fn parse_float(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        return text[..end + "Infinity".len()].parse().unwrap_or(f64::NAN);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// Leading-integer parse: optional sign then decimal digits. Anything after
/// the digits is ignored, so "3.7" yields 3.
pub fn parse_int(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    text[..sign + digits].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
