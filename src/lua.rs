use std::fmt::Display;

use mlua::{Function, IntoLua, Lua, UserData, UserDataMethods};
use strum::IntoEnumIterator;

use crate::{
    MarkerStore,
    common::{Color, TILE_SIZE, tiles_to_world},
    marker::{
        LineMarker, MarkerControl, MarkerType, ObjectiveMarker, PointMarker, QuadMarker,
        ShapeMarker, ShapeTextMarker, TextMarker, TextureMarker,
    },
};

/// A Lua state set up for marker scripts.
#[derive(Debug, Clone)]
pub struct MarkerLua(pub Lua);

impl MarkerLua {
    pub fn new() -> mlua::Result<Self> {
        let lua = Lua::new();

        Self::register_enum::<MarkerControl>(&lua, "MARKER_CONTROL")?;
        Self::register_enum::<MarkerType>(&lua, "MARKER_TYPE")?;

        lua.globals().set("TILE_SIZE", TILE_SIZE)?;

        // alpha is optional and defaults to opaque
        let pack_color_func =
            lua.create_function(|_, (r, g, b, a): (f32, f32, f32, Option<f32>)| {
                Ok(Color::new(r, g, b, a.unwrap_or(1.0)).to_double_bits())
            })?;
        lua.globals().set("packColor", pack_color_func)?;

        Ok(Self(lua))
    }

    /// Executes the script at `file_name`, usually to define the functions called later on.
    pub fn load_file(&self, file_name: &str) -> mlua::Result<()> {
        let source = std::fs::read(file_name).map_err(mlua::Error::external)?;
        self.load(source, file_name)
    }

    /// Executes `source`, naming the chunk `name` in error messages.
    pub fn load(&self, source: impl AsRef<[u8]>, name: &str) -> mlua::Result<()> {
        self.0
            .load(source.as_ref())
            .set_name("@".to_string() + name)
            .exec()
    }

    /// Calls the global function `function_name` with `store`, which the script may freely modify.
    pub fn call_with_markers(&self, store: &mut MarkerStore, function_name: &str) -> mlua::Result<()> {
        self.0.scope(|scope| {
            let data = scope.create_userdata_ref_mut(store)?;

            let func: Function = self.0.globals().get(function_name)?;

            func.call::<()>(data)?;

            Ok(())
        })
    }

    /// Registers enum into the Lua state. All values are prefixed with `prefix`.
    fn register_enum<T: IntoEnumIterator + IntoLua + Display>(
        lua: &Lua,
        prefix: &str,
    ) -> mlua::Result<()> {
        for variant in T::iter() {
            let new_name = if prefix.is_empty() {
                variant.to_string()
            } else {
                format!("{prefix}_{variant}")
            };
            lua.globals().set(new_name, variant)?;
        }

        Ok(())
    }
}

/// Turns the possibly missing numeric arguments of a script call into the NaN the markers expect.
fn arg(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::NAN)
}

fn world(x: f64, y: f64) -> (f32, f32) {
    (tiles_to_world(x), tiles_to_world(y))
}

impl UserData for MarkerStore {
    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        methods.add_method_mut("add_point", |_, this, (id, x, y): (i32, f64, f64)| {
            let (x, y) = world(x, y);
            this.add(id, ObjectiveMarker::from(PointMarker::new(x, y)));
            Ok(())
        });
        methods.add_method_mut("add_shape", |_, this, (id, x, y): (i32, f64, f64)| {
            let (x, y) = world(x, y);
            this.add(id, ObjectiveMarker::from(ShapeMarker::new(x, y)));
            Ok(())
        });
        methods.add_method_mut(
            "add_text",
            |_, this, (id, text, x, y): (i32, String, f64, f64)| {
                let (x, y) = world(x, y);
                this.add(id, ObjectiveMarker::from(TextMarker::new(&text, x, y)));
                Ok(())
            },
        );
        methods.add_method_mut(
            "add_line",
            |_, this, (id, x1, y1, x2, y2): (i32, f64, f64, f64, f64)| {
                let (x1, y1) = world(x1, y1);
                let (x2, y2) = world(x2, y2);
                this.add(id, ObjectiveMarker::from(LineMarker::new(x1, y1, x2, y2)));
                Ok(())
            },
        );
        methods.add_method_mut(
            "add_texture",
            |_, this, (id, texture_name, x, y): (i32, String, f64, f64)| {
                let (x, y) = world(x, y);
                this.add(
                    id,
                    ObjectiveMarker::from(TextureMarker::new(&texture_name, x, y)),
                );
                Ok(())
            },
        );
        methods.add_method_mut(
            "add_shape_text",
            |_, this, (id, text, x, y): (i32, String, f64, f64)| {
                let (x, y) = world(x, y);
                this.add(id, ObjectiveMarker::from(ShapeTextMarker::new(&text, x, y)));
                Ok(())
            },
        );
        methods.add_method_mut("add_quad", |_, this, id: i32| {
            this.add(id, ObjectiveMarker::from(QuadMarker::default()));
            Ok(())
        });
        methods.add_method_mut("remove", |_, this, id: i32| Ok(this.remove(id).is_some()));
        methods.add_method("has", |_, this, id: i32| Ok(this.has(id)));
        methods.add_method("size", |_, this, _: ()| Ok(this.size()));
        methods.add_method_mut(
            "control",
            |_, this, (id, code, value, p1, p2): (i32, i64, Option<f64>, Option<f64>, Option<f64>)| {
                let Some(code) = u8::try_from(code)
                    .ok()
                    .and_then(|code| MarkerControl::try_from(code).ok())
                else {
                    tracing::debug!("Ignoring unknown marker control {code}");
                    return Ok(());
                };

                if let Some(marker) = this.get_mut(id) {
                    marker.control(code, arg(value), arg(p1), arg(p2));
                }
                Ok(())
            },
        );
        methods.add_method_mut(
            "set_text",
            |_, this, (id, text, formatted): (i32, String, Option<bool>)| {
                if let Some(marker) = this.get_mut(id) {
                    marker.control_text(MarkerControl::Text, &text, formatted.unwrap_or(false));
                }
                Ok(())
            },
        );
        methods.add_method_mut(
            "set_texture",
            |_, this, (id, texture_name): (i32, String)| {
                if let Some(marker) = this.get_mut(id) {
                    marker.control_text(MarkerControl::Texture, &texture_name, false);
                }
                Ok(())
            },
        );
    }
}
