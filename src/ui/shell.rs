// SPDX-License-Identifier: MPL-2.0
//! Localized page frame for the collection browser.
//!
//! Renders the header, the filter placeholders, the loading indicator, the
//! artwork field legend, and a language switcher. Every visible string comes
//! from the localization service.

use crate::i18n::{I18n, LocaleCode, MessageKey};
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, container, text, Column, Row, Text},
    Element, Length,
};

/// Filter placeholders, in display order.
pub const FILTER_KEYS: [MessageKey; 4] = [
    MessageKey::AllTypes,
    MessageKey::AllArtists,
    MessageKey::AllDates,
    MessageKey::AllCountries,
];

/// Artwork detail labels, in display order.
pub const FIELD_KEYS: [MessageKey; 4] = [
    MessageKey::Artist,
    MessageKey::Dimensions,
    MessageKey::Medium,
    MessageKey::Inscriptions,
];

/// Contextual data needed to render the shell.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    LocaleSelected(LocaleCode),
}

/// Render the shell.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Text::new(ctx.i18n.tr(MessageKey::Header)).size(typography::TITLE_LG);

    let filters = FILTER_KEYS.iter().fold(
        Row::new().spacing(spacing::SM).align_y(Vertical::Center),
        |row, key| {
            row.push(
                container(text(ctx.i18n.tr(key)).size(typography::BODY))
                    .padding(spacing::XS),
            )
        },
    );

    let fields = FIELD_KEYS.iter().fold(Column::new().spacing(spacing::XXS), |column, key| {
        // French labels carry their own trailing space before the colon.
        column.push(text(format!("{}:", ctx.i18n.tr(key))).size(typography::CAPTION))
    });

    let loading = text(ctx.i18n.tr(MessageKey::Loading)).size(typography::TITLE_SM);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(header)
        .push(filters)
        .push(loading)
        .push(fields)
        .push(language_switcher(&ctx));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn language_switcher<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    ctx.i18n
        .available_locales()
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, locale| {
            let selected = locale == ctx.i18n.current_locale();
            let label = text(locale.to_string().to_uppercase()).size(typography::CAPTION);
            row.push(
                button(label)
                    .on_press_maybe((!selected).then(|| Message::LocaleSelected(locale.clone()))),
            )
        })
        .into()
}
