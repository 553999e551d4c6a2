use chromap::data::{Column, OwnedSample};
use chromap::palette::Palette;
use chromap::{ByteOrder, ColorMapper, Config, PackedColor, resolve};

use super::{ORDERS, random_data, standard};
use crate::{assert_pixmap_eq, hex_pixmap, mapped_pixmap};

/// Index 0 takes the first palette color, anything else the NaN color
fn first_or_nan(data: &dyn Column, palette: &Palette) -> Vec<PackedColor> {
    (0..data.len())
        .map(|i| match i {
            0 => palette.first().unwrap_or(palette.nan_color()),
            _ => palette.nan_color(),
        })
        .collect()
}

#[test]
fn red_and_gray() {
    let cfg = Config::new()
        .with_palette(["#ff0000", "#00ff00"])
        .with_nan_color("gray");
    let data = vec![0.0, 1.0];

    for order in ORDERS {
        let mapper = ColorMapper::new(cfg.clone(), resolve::from_fn(first_or_nan))
            .unwrap()
            .with_byte_order(order);
        assert_eq!(mapper.to_hex(&data), vec!["#ff0000", "#808080"]);
        assert_eq!(
            mapper.to_buffer(&data),
            vec![255, 0, 0, 255, 128, 128, 128, 255]
        );

        let actual = mapped_pixmap(&mapper, &data, 2, 1);
        let expected = hex_pixmap(&mapper.to_hex(&data), 2, 1);
        assert_pixmap_eq!(actual, expected, format!("red-and-gray-{order:?}"));
    }
}

#[test]
fn linear_gradient_image() {
    let data = random_data(1, 32 * 16, 0.0, 100.0);
    for order in ORDERS {
        let mapper = ColorMapper::new(standard(), resolve::Linear::new())
            .unwrap()
            .with_byte_order(order);
        let actual = mapped_pixmap(&mapper, &data, 32, 16);
        let expected = hex_pixmap(&mapper.to_hex(&data), 32, 16);
        assert_pixmap_eq!(actual, expected, format!("linear-{order:?}"));
    }
}

#[test]
fn translucent_colors_are_drawn_opaque_on_big_endian() {
    let cfg = Config::new().with_palette([0xff000080u32]);
    let mapper = ColorMapper::new(cfg, resolve::Linear::new())
        .unwrap()
        .with_byte_order(ByteOrder::Big);
    let data = vec![1.0];
    assert_eq!(mapper.to_buffer(&data), vec![255, 0, 0, 255]);

    let actual = mapped_pixmap(&mapper, &data, 1, 1);
    let expected = hex_pixmap(&mapper.to_hex(&data), 1, 1);
    assert_pixmap_eq!(actual, expected, "translucent-big");
}

#[test]
fn missing_values_image() {
    let mut data: Vec<OwnedSample> = random_data(2, 64, -1.0, 1.0)
        .into_iter()
        .map(OwnedSample::from)
        .collect();
    for i in (0..data.len()).step_by(5) {
        data[i] = OwnedSample::Null;
    }
    let mapper = ColorMapper::new(standard().with_nan_color("black"), resolve::Linear::new())
        .unwrap();
    let hex = mapper.to_hex(&data);
    assert!(hex.iter().step_by(5).all(|h| h == "#000000"));

    let actual = mapped_pixmap(&mapper, &data, 8, 8);
    let expected = hex_pixmap(&hex, 8, 8);
    assert_pixmap_eq!(actual, expected, "missing-values");
}

#[test]
fn empty_data() {
    for order in ORDERS {
        let mapper = ColorMapper::new(standard(), resolve::Linear::new())
            .unwrap()
            .with_byte_order(order);
        let data: Vec<f64> = Vec::new();
        assert!(mapper.to_hex(&data).is_empty());
        assert!(mapper.to_buffer(&data).is_empty());
    }
}
