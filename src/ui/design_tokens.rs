// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the gallery screen.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use art_space::ui::design_tokens::{palette, spacing};
use iced::Color;

let card_background = palette::WHITE;
let padding = spacing::MD; // 16px
```
"#]

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const SHADOW: f32 = 0.35;
    pub const PRESSED: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Component Sizes
// ============================================================================

pub mod sizing {
    /// Side of the square art card.
    pub const CARD: f32 = 300.0;

    /// Height of the Back/Next buttons.
    pub const NAV_BUTTON_HEIGHT: f32 = 60.0;

    /// Minimum width of the Back/Next buttons.
    pub const NAV_BUTTON_WIDTH: f32 = 120.0;

    /// Initial window size.
    pub const WINDOW_WIDTH: f32 = 480.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;

    /// Smallest window that still fits the card and both buttons.
    pub const MIN_WINDOW_WIDTH: f32 = 360.0;
    pub const MIN_WINDOW_HEIGHT: f32 = 600.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App title ("ArtSpace").
    pub const TITLE_LG: f32 = 30.0;

    /// Art piece title and author.
    pub const TITLE_MD: f32 = 20.0;

    pub const BODY: f32 = 14.0;

    /// Position counter.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Elevation of the art card.
    pub const CARD: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::CARD < sizing::MIN_WINDOW_WIDTH);
    assert!(sizing::MIN_WINDOW_WIDTH <= sizing::WINDOW_WIDTH);
    assert!(sizing::MIN_WINDOW_HEIGHT <= sizing::WINDOW_HEIGHT);
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);
};
