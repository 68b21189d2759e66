use std;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use ini::Ini;

use alg;

pub const PROJECTION_SECTION: &str = "projection";
pub const PLACEMENT_SECTION: &str = "placement";
pub const PROBE_SECTION: &str = "probe";

pub const DEFAULT_NEAR: f32 = -1.0;
pub const DEFAULT_FAR: f32 = 1.0;

/// View volume for an orthographic projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Projection {
        Projection {
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

impl Projection {
    /// Rejects bounds that would give the projection infinite or NaN
    /// entries.
    pub fn validate(&self) -> Result<()> {
        let bounds = [
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
            ("top", self.top),
            ("near", self.near),
            ("far", self.far),
        ];

        for &(name, value) in &bounds {
            if !value.is_finite() {
                return Err(anyhow!("Projection bound \"{}\" is not finite", name));
            }
        }

        let extents = [
            ("left", "right", self.right - self.left),
            ("bottom", "top", self.top - self.bottom),
            ("near", "far", self.far - self.near),
        ];

        for &(low, high, extent) in &extents {
            if extent == 0. || !extent.is_finite() {
                return Err(anyhow!(
                    "Projection bounds \"{}\" and \"{}\" describe an empty volume",
                    low,
                    high,
                ));
            }
        }

        // Finite bounds can still overflow the sums or a tiny extent
        if let Some(i) = self.matrix().data.iter().position(|v| !v.is_finite()) {
            return Err(anyhow!(
                "Projection bounds give a non-finite matrix entry at slot {}",
                i,
            ));
        }

        Ok(())
    }

    pub fn matrix(&self) -> alg::Mat4 {
        alg::Mat4::orthographic(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}

/// Axis scale followed by a translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub translation: (f32, f32, f32),
    pub scale: (f32, f32, f32),
}

impl Default for Placement {
    fn default() -> Placement {
        Placement {
            translation: (0.0, 0.0, 0.0),
            scale: (1.0, 1.0, 1.0),
        }
    }
}

impl Placement {
    pub fn matrix(&self) -> alg::Mat4 {
        let (x, y, z) = self.translation;
        let (sx, sy, sz) = self.scale;

        alg::Mat4::identity()
            .scale(sx, sy, sz)
            .translate(x, y, z)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Settings {
    pub projection: Projection,
    pub placement: Placement,
    pub probe: Option<alg::Vec2>,
}

impl Settings {
    pub fn from_ini(ini: &Ini) -> Result<Settings> {
        if ini.section(Some(PROJECTION_SECTION)).is_none() {
            return Err(anyhow!(
                "Failed to load section \"{}\"",
                PROJECTION_SECTION,
            ));
        }

        let defaults = Projection::default();

        let projection = Projection {
            left: load_section_setting(ini, PROJECTION_SECTION, "left")?,
            right: load_section_setting(ini, PROJECTION_SECTION, "right")?,
            bottom: load_section_setting(ini, PROJECTION_SECTION, "bottom")?,
            top: load_section_setting(ini, PROJECTION_SECTION, "top")?,
            near: load_optional_setting(ini, PROJECTION_SECTION, "near")?
                .unwrap_or(defaults.near),
            far: load_optional_setting(ini, PROJECTION_SECTION, "far")?
                .unwrap_or(defaults.far),
        };

        projection.validate()?;

        let placement = if ini.section(Some(PLACEMENT_SECTION)).is_some() {
            let get = |setting: &str, default: f32| -> Result<f32> {
                Ok(
                    load_optional_setting(ini, PLACEMENT_SECTION, setting)?
                        .unwrap_or(default)
                )
            };

            Placement {
                translation: (get("x", 0.0)?, get("y", 0.0)?, get("z", 0.0)?),
                scale: (get("sx", 1.0)?, get("sy", 1.0)?, get("sz", 1.0)?),
            }
        } else {
            debug!("No [{}] section, using defaults", PLACEMENT_SECTION);
            Placement::default()
        };

        let probe = if ini.section(Some(PROBE_SECTION)).is_some() {
            Some(alg::Vec2::new(
                load_section_setting(ini, PROBE_SECTION, "x")?,
                load_section_setting(ini, PROBE_SECTION, "y")?,
            ))
        } else {
            None
        };

        Ok(Settings { projection, placement, probe })
    }
}

pub fn load_config<P: AsRef<Path>>(filename: P) -> Result<Settings> {
    let filename = filename.as_ref();

    let ini = Ini::load_from_file(filename).with_context(
        || format!("Failed to read config \"{}\"", filename.display())
    )?;

    let settings = Settings::from_ini(&ini).with_context(
        || format!("Invalid config \"{}\"", filename.display())
    )?;

    info!("Loaded config from \"{}\"", filename.display());
    debug!("{:?}", settings);

    Ok(settings)
}

pub fn parse_config(text: &str) -> Result<Settings> {
    let ini = Ini::load_from_str(text).context("Failed to parse config")?;
    Settings::from_ini(&ini)
}

pub fn load_section_setting<T>(
    ini: &Ini,
    section: &str,
    setting: &str,
) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    load_optional_setting(ini, section, setting)?.ok_or_else(
        || anyhow!(
            "Failed to load setting \"{}\" in section \"{}\"",
            setting,
            section,
        )
    )
}

fn load_optional_setting<T>(
    ini: &Ini,
    section: &str,
    setting: &str,
) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let settings = ini.section(Some(section)).ok_or_else(
        || anyhow!("Failed to load section \"{}\"", section)
    )?;

    let value = match settings.get(setting) {
        Some(value) => value.trim(),
        None => return Ok(None),
    };

    let parsed = value.parse::<T>().with_context(
        || format!(
            "Invalid value \"{}\" for setting \"{}\" in section \"{}\"",
            value,
            setting,
            section,
        )
    )?;

    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use config::*;

    const SCREEN: &str = "
[projection]
left = 0
right = 800
bottom = 0
top = 600
";

    #[test]
    fn projection_defaults() {
        let settings = parse_config(SCREEN).unwrap();

        assert_eq!(settings.projection.right, 800.);
        assert_eq!(settings.projection.near, DEFAULT_NEAR);
        assert_eq!(settings.projection.far, DEFAULT_FAR);
        assert_eq!(settings.placement, Placement::default());
        assert_eq!(settings.probe, None);

        let ortho = settings.projection.matrix();
        assert_relative_eq!(ortho[12], -1.);
        assert_relative_eq!(ortho[13], -1.);
    }

    #[test]
    fn full_config() {
        let text = "
[projection]
left = -2
right = 2
bottom = -1
top = 1
near = 0.5
far = 10

[placement]
x = 1
y = 2
z = 3
sx = 2
sy = 3
sz = 4

[probe]
x = 3
y = 4
";

        let settings = parse_config(text).unwrap();

        assert_eq!(settings.projection.near, 0.5);
        assert_eq!(settings.placement.translation, (1., 2., 3.));

        let model = settings.placement.matrix();
        let expected = alg::Mat4::identity()
            .translate(1., 2., 3.)
            .scale(2., 3., 4.);

        assert_eq!(model, expected);

        let probe = settings.probe.unwrap();
        assert_eq!(probe.mag(), 5.);
        assert_relative_eq!(
            probe.norm(),
            alg::Vec2::new(0.6, 0.8),
            max_relative = 1e-6
        );
    }

    #[test]
    fn missing_section() {
        let err = parse_config("[placement]\nx = 1\n").unwrap_err();
        eprintln!("{:#}", err);

        assert!(err.to_string().contains("section \"projection\""));
    }

    #[test]
    fn missing_setting() {
        let err = parse_config("[projection]\nleft = 0\nright = 1\ntop = 1\n")
            .unwrap_err();
        eprintln!("{:#}", err);

        assert!(err.to_string().contains("setting \"bottom\""));
    }

    #[test]
    fn probe_requires_both_axes() {
        let text = format!("{}\n[probe]\nx = 1\n", SCREEN);
        let err = parse_config(&text).unwrap_err();

        assert!(err.to_string().contains("in section \"probe\""));
    }

    #[test]
    fn invalid_value() {
        let text = SCREEN.replace("right = 800", "right = wide");
        let err = parse_config(&text).unwrap_err();
        eprintln!("{:#}", err);

        assert!(err.to_string().contains("\"wide\""));
    }

    #[test]
    fn degenerate_bounds() {
        let text = SCREEN.replace("right = 800", "right = 0");
        let err = parse_config(&text).unwrap_err();
        eprintln!("{:#}", err);

        assert!(err.to_string().contains("empty volume"));

        let projection = Projection { far: DEFAULT_NEAR, ..Projection::default() };
        assert!(projection.validate().is_err());

        let projection = Projection {
            top: f32::INFINITY,
            ..Projection::default()
        };
        assert!(projection.validate().is_err());

        assert!(Projection::default().validate().is_ok());
    }

    #[test]
    fn overflowing_bounds() {
        // right + left overflows
        let projection = Projection {
            left: 3.0e38,
            right: 3.4e38,
            ..Projection::default()
        };

        assert!(projection.matrix()[12].is_infinite());

        let err = projection.validate().unwrap_err();
        eprintln!("{:#}", err);
        assert!(err.to_string().contains("slot 12"));

        // Subnormal width
        let projection = Projection {
            left: 0.,
            right: 1e-45,
            ..Projection::default()
        };

        assert!(projection.matrix()[0].is_infinite());

        let err = projection.validate().unwrap_err();
        eprintln!("{:#}", err);
        assert!(err.to_string().contains("slot 0"));
    }

    #[test]
    fn inline_comments() {
        let text = "
[projection]
left = 0
right = 800
bottom = 0
top = 600
near = -1      ; optional, default -1
far = 1        ; optional, default 1

[placement]     ; optional section
x = 0           ; translation, default 0
y = 0
z = 0
sx = 1          ; scale, default 1
sy = 1
sz = 1

[probe]         ; optional section, both keys required when present
x = 3
y = 4
";

        let settings = parse_config(text).unwrap();

        assert_eq!(settings.projection.near, -1.);
        assert_eq!(settings.projection.far, 1.);
        assert_eq!(settings.placement, Placement::default());
        assert_eq!(settings.probe, Some(alg::Vec2::new(3., 4.)));
    }

    #[test]
    fn missing_file() {
        let err = load_config("does/not/exist.ini").unwrap_err();
        eprintln!("{:#}", err);

        assert!(err.to_string().contains("does/not/exist.ini"));
    }
}
