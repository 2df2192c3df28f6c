use crate::core::markup::Element;
use crate::core::template::Template;
use crate::domain::model::MenuRecord;
use crate::utils::error::Result;

pub const VEGETARIAN_NAME_CLASS: &str = "itemName vegetarian";
pub const NAME_CLASS: &str = "itemName";

/// Markup for a single menu item.
pub fn render_item(record: &MenuRecord) -> Element {
    let name_class = if record.is_vegetarian() {
        VEGETARIAN_NAME_CLASS
    } else {
        NAME_CLASS
    };

    let name_row = Element::new("div")
        .with_class("itemNameWrap")
        .child(Element::new("span").with_class(name_class).text(record.name.as_str()))
        .child(Element::new("span").with_class("itemMiddle"))
        .child(Element::new("span").with_class("itemPrice").text(record.price_text()));

    Element::new("div")
        .with_class("itemWrap")
        .child(name_row)
        .child(
            Element::new("span")
                .with_class("itemDescription")
                .text(record.ingredients.as_str()),
        )
}

/// One fragment per record, in group order.
pub fn render_group(group: &[MenuRecord]) -> Vec<Element> {
    group.iter().map(render_item).collect()
}

/// Complete document for one menu group.
pub fn render(group: &[MenuRecord], template_source: &str) -> Result<String> {
    let template = Template::parse(template_source)?;
    Ok(template.render(&render_group(group)))
}
