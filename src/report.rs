use serenity::builder::CreateEmbed;
use serenity::model::Timestamp;

use crate::pricing::PricingSnapshot;

const EMBED_COLOR: u32 = 0x0099ff;
const TITLE: &str = "PoE Flip Assistance";
const DESCRIPTION: &str = "Here are the calculated prices and profits:";
const FOOTER_ICON_URL: &str = "https://pathofexile.com/favicon.ico";

/// Label, currency unit and trade page for each snapshot field, in the order
/// they appear in the reply. Profit fields have no trade page and are
/// rendered as plain text instead of a link.
const FIELD_TABLE: [(&str, &str, Option<&str>); 10] = [
    (
        "Divine price",
        "Chaos",
        Some("https://www.pathofexile.com/trade/exchange/Necropolis/9z28fK"),
    ),
    (
        "Bulk price (Screaming)",
        "Divine",
        Some("https://www.pathofexile.com/trade/exchange/Necropolis/zdO5Ob2U4"),
    ),
    (
        "Bulk price (Incandescent)",
        "Divine",
        Some("https://www.pathofexile.com/trade/exchange/Necropolis/pWOOqJdt0"),
    ),
    (
        "Bulk price (Maven)",
        "Divine",
        Some("https://www.pathofexile.com/trade/exchange/Necropolis/JQr4ZvbIl"),
    ),
    (
        "Single price (Screaming)",
        "Chaos",
        Some("https://www.pathofexile.com/trade/exchange/Necropolis/YqM0zE7tY"),
    ),
    (
        "Single price (Incandescent)",
        "Chaos",
        Some("https://www.pathofexile.com/trade/exchange/Necropolis/4rJ2VRgS9"),
    ),
    (
        "Single price (Maven)",
        "Chaos",
        Some("https://www.pathofexile.com/trade/exchange/Necropolis/LK2Y6PGun"),
    ),
    ("Profit Screaming", "Chaos", None),
    ("Profit Incandescent", "Chaos", None),
    ("Profit Maven", "Chaos", None),
];

/// A single labeled value of the report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// The user facing reply, derived 1:1 from a snapshot. Kept independent from
/// the serenity builders so the content can be inspected in tests; `apply`
/// turns it into an embed.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<ReportField>,
    pub timestamp: Timestamp,
    pub footer_text: String,
    pub footer_icon_url: String,
}

impl Report {
    /// Render a snapshot into the fixed ten field layout
    /// The timestamp is the moment of formatting, not of the fetch.
    pub fn from_snapshot(snapshot: &PricingSnapshot) -> Self {
        let values = [
            snapshot.divine_price,
            snapshot.bulk_price_screaming,
            snapshot.bulk_price_incandescent,
            snapshot.bulk_price_maven,
            snapshot.single_price_screaming,
            snapshot.single_price_incandescent,
            snapshot.single_price_maven,
            snapshot.profit_screaming,
            snapshot.profit_incandescent,
            snapshot.profit_maven,
        ];
        let fields = FIELD_TABLE
            .iter()
            .zip(values)
            .map(|(&(name, unit, trade_url), amount)| {
                let value = match trade_url {
                    Some(url) => format!("[{amount} {unit}]({url})"),
                    None => format!("{amount} {unit}"),
                };
                ReportField {
                    name: name.to_string(),
                    value,
                    inline: true,
                }
            })
            .collect();

        Report {
            title: TITLE.to_string(),
            description: DESCRIPTION.to_string(),
            color: EMBED_COLOR,
            fields,
            timestamp: Timestamp::now(),
            footer_text: TITLE.to_string(),
            footer_icon_url: FOOTER_ICON_URL.to_string(),
        }
    }

    /// Fill an embed builder with the report content
    pub fn apply<'a>(&self, embed: &'a mut CreateEmbed) -> &'a mut CreateEmbed {
        embed
            .colour(self.color)
            .title(&self.title)
            .description(&self.description)
            .fields(
                self.fields
                    .iter()
                    .map(|f| (f.name.as_str(), f.value.as_str(), f.inline)),
            )
            .timestamp(self.timestamp)
            .footer(|f| f.text(&self.footer_text).icon_url(&self.footer_icon_url))
    }
}
