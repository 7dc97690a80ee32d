//! # Receipt Rendering
//!
//! Turns a priced basket into the printable receipt text.
//!
//! ```text
//! ===== 영수증 =====
//! 품목:
//! - 스마트폰 케이스 1개 (단가: 15,000원, 총액: 15,000원)
//! - 보호필름 1개 (단가: 5,000원, 총액: 5,000원)
//! 소계: 20,000원
//! 할인: 2,000원 (10% 할인)
//! 최종 결제 금액: 18,000원
//! ==================
//! ```
//!
//! Amounts are rounded half-up to the currency's minor unit by `Money`'s
//! `Display`; the underlying values stay exact.

use std::fmt::Write;

use crate::pricing::Receipt;
use crate::types::BasketItem;

const HEADER: &str = "===== 영수증 =====";
const FOOTER: &str = "==================";

/// Renders the receipt for `items` priced as `receipt`.
///
/// Every line, including the footer, ends with `\n`.
pub fn render_receipt(items: &[BasketItem], receipt: &Receipt) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", HEADER);
    let _ = writeln!(out, "품목:");
    for item in items {
        let _ = writeln!(
            out,
            "- {} {}개 (단가: {}, 총액: {})",
            item.name(),
            item.quantity(),
            item.unit_price(),
            item.line_total()
        );
    }
    let _ = writeln!(out, "소계: {}", receipt.subtotal);

    let rate = receipt.rate();
    if rate.is_zero() {
        let _ = writeln!(out, "할인: {}", receipt.discount);
    } else {
        let _ = writeln!(out, "할인: {} ({} 할인)", receipt.discount, rate);
    }

    let _ = writeln!(out, "최종 결제 금액: {}", receipt.final_amount);
    let _ = writeln!(out, "{}", FOOTER);

    out
}
