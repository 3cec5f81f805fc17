// SPDX-License-Identifier: MPL-2.0
//! Spacing and font size scales shared by the shell views.

/// Spacing scale (8px grid).
pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

/// Font size scale.
pub mod typography {
    /// Page header.
    pub const TITLE_LG: f32 = 30.0;

    /// Section titles.
    pub const TITLE_SM: f32 = 18.0;

    /// Default body text.
    pub const BODY: f32 = 14.0;

    /// Captions and secondary labels.
    pub const CAPTION: f32 = 12.0;
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(typography::CAPTION < typography::BODY);
    assert!(typography::BODY < typography::TITLE_SM);
    assert!(typography::TITLE_SM < typography::TITLE_LG);
};
