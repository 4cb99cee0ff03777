//! 终端渲染：页头与商品卡片

use std::fmt::Write;

use crate::app::catalog::{format_amount, Product};

pub const BRAND: &str = "AmazonClone";
pub const SEARCH_PLACEHOLDER: &str = "Search for products...";
const CARD_RULE: &str = "+----------------------------------------+";

pub fn render_header(cart_len: usize) -> String {
    format!("{BRAND}  |  [ {SEARCH_PLACEHOLDER} ] [Search]  |  Cart ({cart_len})")
}

pub fn render_card(product: &Product) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "{CARD_RULE}");
    let _ = writeln!(card, "| {}", product.image);
    let _ = writeln!(card, "| {}", product.name);
    let _ = writeln!(card, "| ⭐ {}", format_amount(product.rating));
    let _ = writeln!(card, "| ${}", format_amount(product.price));
    let _ = writeln!(card, "| [Add to Cart]  (add {})", product.id);
    let _ = write!(card, "{CARD_RULE}");
    card
}

/// 页头加商品网格，顺序与服务端返回一致
pub fn render_page(products: &[Product], cart_len: usize) -> String {
    let mut page = render_header(cart_len);
    for product in products {
        page.push('\n');
        page.push_str(&render_card(product));
    }
    page
}
