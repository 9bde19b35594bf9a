//! Plain-text rendering of listing cards

use listing_core::card::CardView;
use listing_core::ListingEntry;

/// Render one card as a block of text
pub fn render_card(card: &CardView) -> String {
    let delete = if card.show_delete { "  [delete]" } else { "" };

    [
        format!(
            "{}{}  [{}]{}",
            card.id.title,
            card.id.value,
            card.status.as_str().to_uppercase(),
            delete
        ),
        format!("  {}{}", card.module_field.title, card.module_field.value),
        format!("  {}{}", card.date.title, card.date.value),
        format!("  {} {} >", card.count.display_value(), card.count.label),
    ]
    .into_iter()
    .map(|line| line + "\n")
    .collect()
}

/// Render every entry, failing on the first one that cannot be displayed
pub fn render_listing(entries: &[ListingEntry]) -> listing_core::Result<String> {
    if entries.is_empty() {
        return Ok("No entries.\n".to_string());
    }

    let cards = entries
        .iter()
        .map(|entry| CardView::build(entry).map(|card| render_card(&card)))
        .collect::<listing_core::Result<Vec<_>>>()?;

    Ok(cards.join("\n"))
}
