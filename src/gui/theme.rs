use eframe::egui::{
    self,
    style::Selection,
    Color32,
    Stroke,
    Visuals,
};

/// Accent colors used by the panels, one palette per egui theme variant.
#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    background_dark: Color32,
    background_light: Color32,
    foreground: Color32,
    muted: Color32,
    selection: Color32,
    red: Color32,
    green: Color32,
    cyan: Color32,
}

impl Theme {
    pub fn dracula() -> Self {
        Theme {
            dark: Palette {
                background: Color32::from_rgb(0x28, 0x2a, 0x36),
                background_dark: Color32::from_rgb(33, 35, 53),
                background_light: Color32::from_rgb(52, 54, 66),
                foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
                muted: Color32::from_rgb(0x62, 0x72, 0xa4),
                selection: Color32::from_rgb(0x44, 0x47, 0x5a),
                red: Color32::from_rgb(0xff, 0x55, 0x55),
                green: Color32::from_rgb(0x50, 0xfa, 0x7b),
                cyan: Color32::from_rgb(139, 233, 253),
            },
            light: Palette {
                background: Color32::from_rgb(248, 248, 242),
                background_dark: Color32::from_rgb(235, 235, 230),
                background_light: Color32::from_rgb(255, 255, 250),
                foreground: Color32::from_rgb(40, 42, 54),
                muted: Color32::from_rgb(120, 130, 160),
                selection: Color32::from_rgb(200, 200, 220),
                red: Color32::from_rgb(200, 80, 80),
                green: Color32::from_rgb(80, 200, 120),
                cyan: Color32::from_rgb(80, 190, 230),
            },
        }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).muted
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).green
    }

    pub fn cyan(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).cyan
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let mut visuals = Visuals { dark_mode: is_dark, ..default };

    visuals.widgets.noninteractive.bg_fill = palette.background;
    visuals.widgets.noninteractive.fg_stroke.color = palette.foreground;
    visuals.widgets.inactive.bg_fill = palette.background_light;
    visuals.widgets.inactive.fg_stroke.color = palette.foreground;
    visuals.widgets.hovered.bg_fill = palette.selection;
    visuals.widgets.hovered.bg_stroke.color = palette.cyan;
    visuals.widgets.active.bg_fill = palette.selection;
    visuals.widgets.active.bg_stroke.color = palette.cyan;

    visuals.selection = Selection {
        bg_fill: palette.selection,
        stroke: Stroke { color: palette.foreground, ..visuals.selection.stroke },
    };
    visuals.hyperlink_color = palette.cyan;
    visuals.error_fg_color = palette.red;
    visuals.window_fill = palette.background;
    visuals.panel_fill = palette.background_dark;

    ctx.set_visuals_of(variant, visuals);
}
