use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
};

use objective_markers::{
    MarkerKind, MarkerStore,
    config::get_config,
    icons::{IconTable, set_icon_formatter},
    lua::MarkerLua,
};

fn describe(kind: &MarkerKind) -> String {
    match kind {
        MarkerKind::Text(marker) => format!("{:?}", marker.display_text()),
        MarkerKind::ShapeText(marker) => format!("{:?}", marker.display_text()),
        MarkerKind::Texture(marker) => marker.texture_name.clone(),
        MarkerKind::Quad(marker) if marker.is_untextured() => "untextured".to_string(),
        MarkerKind::Quad(marker) => marker.texture_name.clone(),
        _ => String::new(),
    }
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("objective-markers-tool", String::as_str)
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        tracing::error!("Usage: {} <input> [script] [output]", program_name(&args));
        return;
    }

    let config = get_config();

    if config.icons.enabled {
        set_icon_formatter(IconTable::from_config(&config.icons));
    }

    let file = match File::open(&args[1]) {
        Ok(file) => file,
        Err(err) => {
            tracing::error!("Failed to open {}: {err}", args[1]);
            return;
        }
    };

    let mut store = match MarkerStore::read(&mut BufReader::new(file)) {
        Ok(store) => store,
        Err(err) => {
            tracing::error!("Failed to read markers from {}: {err}", args[1]);
            return;
        }
    };

    if let Some(script) = args.get(2) {
        let file_name = config.scripts.script_path(script);
        let mut run_script = || {
            let lua = MarkerLua::new()?;
            lua.load_file(&file_name)?;
            lua.call_with_markers(&mut store, &config.scripts.entry_point)
        };

        if let Err(err) = run_script() {
            tracing::warn!(
                "Error while running {} in {file_name}: {err:?}",
                config.scripts.entry_point
            );
        }
    }

    for (id, marker) in store.iter_with_ids() {
        let pos = marker.kind.pos();
        tracing::info!(
            "{id}: {} at ({}, {}) flags {:?} {}",
            marker.marker_type(),
            pos.x,
            pos.y,
            marker.flags(),
            describe(&marker.kind)
        );
    }

    if let Some(output) = args.get(3) {
        let file = match File::create(output) {
            Ok(file) => file,
            Err(err) => {
                tracing::error!("Failed to create {output}: {err}");
                return;
            }
        };

        let mut writer = BufWriter::new(file);
        if let Err(err) = store.write(&mut writer) {
            tracing::error!("Failed to write markers to {output}: {err}");
            return;
        }
        if let Err(err) = writer.flush() {
            tracing::error!("Failed to write markers to {output}: {err}");
            return;
        }

        tracing::info!("Wrote {} markers to {output}", store.size());
    }
}
