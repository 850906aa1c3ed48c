mod support;

use common::html::{generate, parse, GenerateOptions};
use common::model::factory::{new_container, new_item, ItemKind};
use common::model::{
    BarLink, Borders, Button, CustomFont, Direction, Divider, Document, FlexAlign, HAlign, Image,
    Item, LinkBar, Padding, Row, TableProperties, Text, VAlign, WidthUnit,
};
use pretty_assertions::assert_eq;
use support::{strip_ids, text};

fn every_item_kind() -> Vec<Item> {
    let mut items = Vec::new();

    items.push(Item::Text(Text {
        content: "Jane Doe".to_string(),
        ..Text::default()
    }));
    items.push(Item::Text(Text {
        content: "Visit us".to_string(),
        link: Some("https://example.com".to_string()),
        ..Text::default()
    }));
    items.push(Item::Image(Image {
        src: "https://example.com/logo.png".to_string(),
        alt: "Logo".to_string(),
        link: Some("https://example.com".to_string()),
        ..Image::default()
    }));
    items.push(Item::Socials(LinkBar {
        links: vec![
            BarLink::new("facebook", "https://facebook.com/acme"),
            BarLink::new("linkedin", "https://linkedin.com/company/acme"),
        ],
        ..LinkBar::default()
    }));

    let mut email = BarLink::new("email", "mailto:jane@example.com");
    email.label = Some("jane@example.com".to_string());
    items.push(Item::Icons(LinkBar {
        links: vec![email, BarLink::new("website", "https://example.com")],
        ..LinkBar::default()
    }));

    items.push(new_item(ItemKind::Spacer));
    items.push(new_item(ItemKind::Divider));
    items.push(Item::Divider(Divider {
        width: 120,
        width_unit: WidthUnit::Px,
        ..Divider::default()
    }));
    items.push(Item::Button(Button {
        link: Some("https://example.com/book".to_string()),
        ..Button::default()
    }));

    let mut container = new_container();
    container.cells[0].items.push(text("inner", "Inside"));
    items.push(Item::Container(container));
    items
}

fn styled_row() -> Row {
    let mut padded = Item::Text(Text {
        content: "Centered".to_string(),
        ..Text::default()
    });
    if let Some(padding) = padded.padding_mut() {
        *padding = Padding {
            padding_top: Some(0),
            padding_bottom: Some(6),
            ..Padding::default()
        };
    }

    let mut left = support::cell("left", vec![padded]);
    left.width = 300;
    left.v_align = VAlign::Middle;
    left.h_align = HAlign::Center;
    left.padding.padding_top = Some(5);
    left.background_color = Some("#f5f5f5".to_string());
    left.borders = Borders {
        left: 1,
        color: "#cccccc".to_string(),
        ..Borders::default()
    };

    let mut right = support::cell("right", vec![text("a", "A"), text("b", "B")]);
    right.width = 300;
    right.direction = Direction::Row;
    right.justify_content = FlexAlign::Center;
    right.align_items = FlexAlign::End;

    let mut row = support::row("styled", vec![left, right]);
    row.padding_top = 8;
    row.borders = Borders {
        top: 2,
        color: "#ff0000".to_string(),
        radius: 4,
        ..Borders::default()
    };
    row.background_color = Some("linear-gradient(90deg, #ffffff, #eeeeee)".to_string());
    row
}

fn sample() -> Document {
    Document {
        rows: vec![
            support::row("items", vec![support::cell("all", every_item_kind())]),
            styled_row(),
        ],
        max_width: 640,
        table_properties: TableProperties {
            border: 1,
            cell_spacing: 2,
        },
    }
}

fn fonts() -> Vec<CustomFont> {
    vec![CustomFont::google(
        "Roboto",
        "https://fonts.googleapis.com/css2?family=Roboto",
    )]
}

fn render(document: &Document, fonts: &[CustomFont]) -> String {
    generate(
        &document.rows,
        document.max_width,
        &document.table_properties,
        fonts,
        &GenerateOptions::default(),
    )
}

#[test]
fn generated_html_parses_back_to_the_same_tree() {
    let document = sample();
    let parsed = parse(&render(&document, &fonts())).unwrap();

    assert_eq!(strip_ids(&parsed.document.rows), strip_ids(&document.rows));
    assert_eq!(parsed.document.max_width, 640);
    assert_eq!(parsed.document.table_properties, document.table_properties);
    assert_eq!(parsed.fonts, fonts());
}

#[test]
fn parsed_html_generates_the_same_html() {
    let html = render(&sample(), &fonts());
    let parsed = parse(&html).unwrap();
    assert_eq!(render(&parsed.document, &parsed.fonts), html);
}

#[test]
fn accented_text_survives() {
    let document = Document {
        rows: vec![support::row("r", vec![support::cell("c", vec![text("t", "José Müller")])])],
        ..Document::default()
    };
    let parsed = parse(&render(&document, &[])).unwrap();
    let Item::Text(text) = &parsed.document.rows[0].cells[0].items[0] else {
        panic!("expected text");
    };
    assert_eq!(text.content, "José Müller");
}

#[test]
fn multi_line_text_survives() {
    let document = Document {
        rows: vec![support::row("r", vec![support::cell("c", vec![text("t", "Jane\nCEO")])])],
        ..Document::default()
    };
    let parsed = parse(&render(&document, &[])).unwrap();
    assert_eq!(strip_ids(&parsed.document.rows), strip_ids(&document.rows));
}

#[test]
fn text_with_an_inline_image_survives() {
    let content = r#"<img src="flag.png" width="16"> Jane Doe"#;
    let document = Document {
        rows: vec![support::row("r", vec![support::cell("c", vec![text("t", content)])])],
        ..Document::default()
    };
    let parsed = parse(&render(&document, &[])).unwrap();
    assert_eq!(strip_ids(&parsed.document.rows), strip_ids(&document.rows));
}

#[test]
fn socials_with_only_contact_icons_stay_socials() {
    let bar = Item::Socials(LinkBar {
        links: vec![BarLink::new("website", "https://example.com")],
        ..LinkBar::default()
    });
    let document = Document {
        rows: vec![support::row("r", vec![support::cell("c", vec![bar])])],
        ..Document::default()
    };
    let parsed = parse(&render(&document, &[])).unwrap();
    assert_eq!(strip_ids(&parsed.document.rows), strip_ids(&document.rows));
}
