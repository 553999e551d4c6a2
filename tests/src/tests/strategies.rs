use chromap::palette::Builtin;
use chromap::{ColorMapper, Config, resolve};

use super::{ORDERS, random_data};
use crate::{assert_pixmap_eq, hex_pixmap, mapped_pixmap};

#[test]
fn log_image() {
    let cfg = Config::new().with_builtin_palette(Builtin::OkabeIto);
    let data = random_data(3, 24 * 24, 0.01, 1000.0);
    for order in ORDERS {
        let mapper = ColorMapper::new(cfg.clone(), resolve::Log::new().with_range(0.1, 100.0))
            .unwrap()
            .with_byte_order(order);
        let actual = mapped_pixmap(&mapper, &data, 24, 24);
        let expected = hex_pixmap(&mapper.to_hex(&data), 24, 24);
        assert_pixmap_eq!(actual, expected, format!("log-{order:?}"));
    }
}

#[test]
fn categorical_image() {
    let factors = ["north", "east", "south", "west", "up"];
    let data: Vec<&str> = (0..40).map(|i| factors[(i * 7) % factors.len()]).collect();
    let cfg = Config::new()
        .with_builtin_palette(Builtin::TolBright)
        .with_nan_color("black");
    // "up" is not a factor
    let mapper = ColorMapper::new(cfg, resolve::Categorical::new(factors[..4].iter().copied())).unwrap();
    let hex = mapper.to_hex(&data);
    for (v, h) in data.iter().zip(&hex) {
        match *v {
            "north" => assert_eq!(h, "#4477aa"),
            "up" => assert_eq!(h, "#000000"),
            _ => assert_ne!(h, "#000000"),
        }
    }

    let actual = mapped_pixmap(&mapper, &data, 8, 5);
    let expected = hex_pixmap(&hex, 8, 5);
    assert_pixmap_eq!(actual, expected, "categorical");
}

#[test]
fn palette_change_redraws() {
    let data = random_data(4, 16, 0.0, 1.0);
    let mut mapper = ColorMapper::new(
        Config::new().with_builtin_palette(Builtin::Standard),
        resolve::Linear::new().with_range(0.0, 1.0),
    )
    .unwrap();
    let before = mapped_pixmap(&mapper, &data, 4, 4);

    mapper.set_palette(Builtin::Pastel.specs()).unwrap();
    let after = mapped_pixmap(&mapper, &data, 4, 4);
    assert!(crate::diff_count(&before, &after) > 0);
    let expected = hex_pixmap(&mapper.to_hex(&data), 4, 4);
    assert_pixmap_eq!(after, expected, "pastel");

    // an invalid palette leaves the image unchanged
    assert!(mapper.set_palette(["#1234567"]).is_err());
    let rejected = mapped_pixmap(&mapper, &data, 4, 4);
    assert_eq!(crate::diff_count(&after, &rejected), 0);
}
