//! 商品网格

use super::format::{escape, price_label};
use crate::app::shop::model::Product;

/// 响应式图片尺寸提示
pub const IMAGE_SIZES: &str = "(max-width: 768px) 100vw, (max-width: 1200px) 50vw, 33vw";

/// 商品详情链接；对应页面尚未实现，请求会落到 404
pub fn product_href(id: &str) -> String {
    format!("/products/{}", id)
}

pub fn render_card(product: &Product) -> String {
    format!(
        concat!(
            r#"<a href="{href}" class="product-card">"#,
            r#"<div class="product-image">"#,
            r#"<img src="{src}" alt="{alt}" sizes="{sizes}" loading="lazy">"#,
            r#"</div>"#,
            r#"<div class="product-info">"#,
            r#"<h3 class="product-name">{name}</h3>"#,
            r#"<p class="product-category">{category}</p>"#,
            r#"<p class="product-price">{price}</p>"#,
            r#"</div>"#,
            r#"</a>"#,
        ),
        href = escape(&product_href(&product.id)),
        src = escape(&product.image_url),
        alt = escape(&product.name),
        sizes = IMAGE_SIZES,
        name = escape(&product.name),
        category = escape(&product.category),
        price = escape(&price_label(product.price)),
    )
}

/// 按输入顺序渲染，每个商品一张卡片
pub fn render_product_grid(products: &[Product]) -> String {
    let mut html = String::from(r#"<div class="product-grid">"#);
    for product in products {
        html.push_str(&render_card(product));
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> Product {
        Product {
            id: "1".to_string(),
            name: "Shirt".to_string(),
            price: 19.5,
            image_url: "/a.jpg".to_string(),
            category: "Tops".to_string(),
        }
    }

    #[test]
    fn test_single_card() {
        let html = render_product_grid(&[shirt()]);
        assert_eq!(html.matches(r#"class="product-card""#).count(), 1);
        assert!(html.contains(r#"<a href="/products/1" class="product-card">"#));
        assert!(html.contains(r#"<img src="/a.jpg" alt="Shirt""#));
        assert!(html.contains(IMAGE_SIZES));
        assert!(html.contains(r#"<h3 class="product-name">Shirt</h3>"#));
        assert!(html.contains(r#"<p class="product-category">Tops</p>"#));
        assert!(html.contains(r#"<p class="product-price">$19.50 USD</p>"#));
    }

    #[test]
    fn test_cards_follow_input_order() {
        let mut second = shirt();
        second.id = "2".to_string();
        second.name = "Coat".to_string();
        let html = render_product_grid(&[second, shirt()]);

        let coat = html.find("Coat").unwrap();
        let shirt_pos = html.find(r#"alt="Shirt""#).unwrap();
        assert!(coat < shirt_pos);
        assert_eq!(html.matches(r#"class="product-card""#).count(), 2);
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(render_product_grid(&[]), r#"<div class="product-grid"></div>"#);
    }

    #[test]
    fn test_fields_are_escaped() {
        let mut product = shirt();
        product.name = "<script>alert(1)</script>".to_string();
        product.image_url = r#"/a.jpg" onerror="x"#.to_string();
        let html = render_card(&product);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"src="/a.jpg&quot; onerror=&quot;x""#));
    }
}
