//! 页头和导航栏，静态内容

/// 导航链接：(文本, 路径)
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("SHOP", "/shop"),
    ("NEW ARRIVALS", "/new-arrivals"),
    ("COLLECTIONS", "/collections"),
];

pub const BRAND: &str = "WEBSHOP";

// 图标按钮只有外观，没有行为
fn icon_button(label: &str) -> String {
    format!(
        r#"<button type="button" class="icon-button" aria-label="{label}"><span class="icon icon-{icon}"></span></button>"#,
        label = label,
        icon = label.to_lowercase(),
    )
}

pub fn render_header() -> String {
    let nav: String = NAV_LINKS
        .iter()
        .map(|(text, href)| format!(r#"<li><a href="{href}" class="nav-link">{text}</a></li>"#))
        .collect();

    format!(
        concat!(
            r#"<header class="site-header">"#,
            r#"<div class="header-bar">"#,
            r#"<div class="header-left">{menu}{search}</div>"#,
            r#"<div class="header-brand"><a href="/" class="brand">{brand}</a></div>"#,
            r#"<div class="header-right">{user}{cart}</div>"#,
            r#"</div>"#,
            r#"<nav class="site-nav"><ul>{nav}</ul></nav>"#,
            r#"</header>"#,
        ),
        menu = icon_button("Menu"),
        search = icon_button("Search"),
        brand = BRAND,
        user = icon_button("User"),
        cart = icon_button("Cart"),
        nav = nav,
    )
}
