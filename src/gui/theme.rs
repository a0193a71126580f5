use eframe::egui::{
    self,
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

use crate::core::Rgb;

#[derive(Clone)]
pub struct Theme {
    pub background: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub selection: Color32,
    pub accent: Color32,
    pub card_front: Color32,
    pub card_back: Color32,
    pub card_behind: Color32,
    pub card_stroke: Color32,
    pub card_text: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    pub fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            muted: Color32::from_rgb(0x62, 0x72, 0xa4),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            accent: Color32::from_rgb(189, 147, 249),
            card_front: Color32::from_rgb(248, 248, 242),
            card_back: Color32::from_rgb(235, 230, 250),
            card_behind: Color32::from_rgb(200, 200, 214),
            card_stroke: Color32::from_rgb(66, 69, 80),
            card_text: Color32::from_rgb(40, 42, 54),
        }
    }

    pub fn rgb(color: Rgb) -> Color32 {
        Color32::from_rgb(color.0, color.1, color.2)
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    let default = Visuals::dark();

    ctx.set_visuals(Visuals {
        dark_mode: true,
        widgets: Widgets {
            noninteractive: WidgetVisuals {
                bg_fill: theme.background,
                fg_stroke: Stroke { color: theme.foreground, ..default.widgets.noninteractive.fg_stroke },
                ..default.widgets.noninteractive
            },
            inactive: WidgetVisuals {
                bg_fill: theme.selection,
                fg_stroke: Stroke { color: theme.foreground, ..default.widgets.inactive.fg_stroke },
                ..default.widgets.inactive
            },
            hovered: WidgetVisuals {
                bg_fill: theme.selection,
                bg_stroke: Stroke { color: theme.accent, ..default.widgets.hovered.bg_stroke },
                ..default.widgets.hovered
            },
            ..default.widgets.clone()
        },
        selection: Selection {
            bg_fill: theme.selection,
            stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
        },
        window_shadow: Shadow { color: theme.background, ..default.window_shadow },
        window_fill: theme.background,
        panel_fill: theme.background,
        ..default
    });
}
