use tongdok_core::prefs::{Preferences, Theme, MAX_FONT_SIZE, MIN_FONT_SIZE};

use crate::app::AppContext;
use crate::cli::{SettingsSubcommand, ThemeArg};
use crate::output::{prefs_json, print_prefs};
use crate::ui::{hint, print, receipt};

pub fn handle_settings(ctx: &AppContext, command: &SettingsSubcommand) -> anyhow::Result<()> {
    let mut storage = ctx.open_storage()?;
    let mut prefs = Preferences::load(&storage)?;

    match command {
        SettingsSubcommand::Show { json } => {
            let ui_ctx = ctx.ui_context(*json);
            if ui_ctx.mode.is_json() {
                println!("{}", serde_json::to_string_pretty(&prefs_json(&prefs))?);
            } else {
                print_prefs(&ui_ctx, &prefs);
            }
            return Ok(());
        }
        SettingsSubcommand::Theme { theme } => {
            prefs.theme = match theme {
                ThemeArg::Light => Theme::Light,
                ThemeArg::Dark => Theme::Dark,
                ThemeArg::Sepia => Theme::Sepia,
            };
        }
        SettingsSubcommand::FontSize { size } => {
            prefs.set_font_size(*size);
            if prefs.font_size != *size {
                tracing::debug!(requested = size, applied = prefs.font_size, "font size clamped");
            }
        }
    }
    prefs.save(&mut storage)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        let size = prefs.font_size.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Settings saved",
                &[("Theme", prefs.theme.as_str()), ("Font size", size.as_str())],
            ),
        );
        if let SettingsSubcommand::FontSize { size } = command {
            if prefs.font_size != *size {
                let note = format!("Font size is limited to {}-{}.", MIN_FONT_SIZE, MAX_FONT_SIZE);
                print(&ui_ctx, &hint(&ui_ctx, &note));
            }
        }
    }
    Ok(())
}
