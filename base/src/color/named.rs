//! CSS / SVG color keywords.

use super::ColorU8;

pub const ALICEBLUE: ColorU8 = ColorU8::from_rgb(0xf0, 0xf8, 0xff);
pub const ANTIQUEWHITE: ColorU8 = ColorU8::from_rgb(0xfa, 0xeb, 0xd7);
pub const AQUA: ColorU8 = ColorU8::from_rgb(0x00, 0xff, 0xff);
pub const AQUAMARINE: ColorU8 = ColorU8::from_rgb(0x7f, 0xff, 0xd4);
pub const AZURE: ColorU8 = ColorU8::from_rgb(0xf0, 0xff, 0xff);
pub const BEIGE: ColorU8 = ColorU8::from_rgb(0xf5, 0xf5, 0xdc);
pub const BISQUE: ColorU8 = ColorU8::from_rgb(0xff, 0xe4, 0xc4);
pub const BLACK: ColorU8 = ColorU8::from_rgb(0x00, 0x00, 0x00);
pub const BLANCHEDALMOND: ColorU8 = ColorU8::from_rgb(0xff, 0xeb, 0xcd);
pub const BLUE: ColorU8 = ColorU8::from_rgb(0x00, 0x00, 0xff);
pub const BLUEVIOLET: ColorU8 = ColorU8::from_rgb(0x8a, 0x2b, 0xe2);
pub const BROWN: ColorU8 = ColorU8::from_rgb(0xa5, 0x2a, 0x2a);
pub const BURLYWOOD: ColorU8 = ColorU8::from_rgb(0xde, 0xb8, 0x87);
pub const CADETBLUE: ColorU8 = ColorU8::from_rgb(0x5f, 0x9e, 0xa0);
pub const CHARTREUSE: ColorU8 = ColorU8::from_rgb(0x7f, 0xff, 0x00);
pub const CHOCOLATE: ColorU8 = ColorU8::from_rgb(0xd2, 0x69, 0x1e);
pub const CORAL: ColorU8 = ColorU8::from_rgb(0xff, 0x7f, 0x50);
pub const CORNFLOWERBLUE: ColorU8 = ColorU8::from_rgb(0x64, 0x95, 0xed);
pub const CORNSILK: ColorU8 = ColorU8::from_rgb(0xff, 0xf8, 0xdc);
pub const CRIMSON: ColorU8 = ColorU8::from_rgb(0xdc, 0x14, 0x3c);
pub const CYAN: ColorU8 = ColorU8::from_rgb(0x00, 0xff, 0xff);
pub const DARKBLUE: ColorU8 = ColorU8::from_rgb(0x00, 0x00, 0x8b);
pub const DARKCYAN: ColorU8 = ColorU8::from_rgb(0x00, 0x8b, 0x8b);
pub const DARKGOLDENROD: ColorU8 = ColorU8::from_rgb(0xb8, 0x86, 0x0b);
pub const DARKGRAY: ColorU8 = ColorU8::from_rgb(0xa9, 0xa9, 0xa9);
pub const DARKGREEN: ColorU8 = ColorU8::from_rgb(0x00, 0x64, 0x00);
pub const DARKGREY: ColorU8 = ColorU8::from_rgb(0xa9, 0xa9, 0xa9);
pub const DARKKHAKI: ColorU8 = ColorU8::from_rgb(0xbd, 0xb7, 0x6b);
pub const DARKMAGENTA: ColorU8 = ColorU8::from_rgb(0x8b, 0x00, 0x8b);
pub const DARKOLIVEGREEN: ColorU8 = ColorU8::from_rgb(0x55, 0x6b, 0x2f);
pub const DARKORANGE: ColorU8 = ColorU8::from_rgb(0xff, 0x8c, 0x00);
pub const DARKORCHID: ColorU8 = ColorU8::from_rgb(0x99, 0x32, 0xcc);
pub const DARKRED: ColorU8 = ColorU8::from_rgb(0x8b, 0x00, 0x00);
pub const DARKSALMON: ColorU8 = ColorU8::from_rgb(0xe9, 0x96, 0x7a);
pub const DARKSEAGREEN: ColorU8 = ColorU8::from_rgb(0x8f, 0xbc, 0x8f);
pub const DARKSLATEBLUE: ColorU8 = ColorU8::from_rgb(0x48, 0x3d, 0x8b);
pub const DARKSLATEGRAY: ColorU8 = ColorU8::from_rgb(0x2f, 0x4f, 0x4f);
pub const DARKSLATEGREY: ColorU8 = ColorU8::from_rgb(0x2f, 0x4f, 0x4f);
pub const DARKTURQUOISE: ColorU8 = ColorU8::from_rgb(0x00, 0xce, 0xd1);
pub const DARKVIOLET: ColorU8 = ColorU8::from_rgb(0x94, 0x00, 0xd3);
pub const DEEPPINK: ColorU8 = ColorU8::from_rgb(0xff, 0x14, 0x93);
pub const DEEPSKYBLUE: ColorU8 = ColorU8::from_rgb(0x00, 0xbf, 0xff);
pub const DIMGRAY: ColorU8 = ColorU8::from_rgb(0x69, 0x69, 0x69);
pub const DIMGREY: ColorU8 = ColorU8::from_rgb(0x69, 0x69, 0x69);
pub const DODGERBLUE: ColorU8 = ColorU8::from_rgb(0x1e, 0x90, 0xff);
pub const FIREBRICK: ColorU8 = ColorU8::from_rgb(0xb2, 0x22, 0x22);
pub const FLORALWHITE: ColorU8 = ColorU8::from_rgb(0xff, 0xfa, 0xf0);
pub const FORESTGREEN: ColorU8 = ColorU8::from_rgb(0x22, 0x8b, 0x22);
pub const FUCHSIA: ColorU8 = ColorU8::from_rgb(0xff, 0x00, 0xff);
pub const GAINSBORO: ColorU8 = ColorU8::from_rgb(0xdc, 0xdc, 0xdc);
pub const GHOSTWHITE: ColorU8 = ColorU8::from_rgb(0xf8, 0xf8, 0xff);
pub const GOLD: ColorU8 = ColorU8::from_rgb(0xff, 0xd7, 0x00);
pub const GOLDENROD: ColorU8 = ColorU8::from_rgb(0xda, 0xa5, 0x20);
pub const GRAY: ColorU8 = ColorU8::from_rgb(0x80, 0x80, 0x80);
pub const GREEN: ColorU8 = ColorU8::from_rgb(0x00, 0x80, 0x00);
pub const GREENYELLOW: ColorU8 = ColorU8::from_rgb(0xad, 0xff, 0x2f);
pub const GREY: ColorU8 = ColorU8::from_rgb(0x80, 0x80, 0x80);
pub const HONEYDEW: ColorU8 = ColorU8::from_rgb(0xf0, 0xff, 0xf0);
pub const HOTPINK: ColorU8 = ColorU8::from_rgb(0xff, 0x69, 0xb4);
pub const INDIANRED: ColorU8 = ColorU8::from_rgb(0xcd, 0x5c, 0x5c);
pub const INDIGO: ColorU8 = ColorU8::from_rgb(0x4b, 0x00, 0x82);
pub const IVORY: ColorU8 = ColorU8::from_rgb(0xff, 0xff, 0xf0);
pub const KHAKI: ColorU8 = ColorU8::from_rgb(0xf0, 0xe6, 0x8c);
pub const LAVENDER: ColorU8 = ColorU8::from_rgb(0xe6, 0xe6, 0xfa);
pub const LAVENDERBLUSH: ColorU8 = ColorU8::from_rgb(0xff, 0xf0, 0xf5);
pub const LAWNGREEN: ColorU8 = ColorU8::from_rgb(0x7c, 0xfc, 0x00);
pub const LEMONCHIFFON: ColorU8 = ColorU8::from_rgb(0xff, 0xfa, 0xcd);
pub const LIGHTBLUE: ColorU8 = ColorU8::from_rgb(0xad, 0xd8, 0xe6);
pub const LIGHTCORAL: ColorU8 = ColorU8::from_rgb(0xf0, 0x80, 0x80);
pub const LIGHTCYAN: ColorU8 = ColorU8::from_rgb(0xe0, 0xff, 0xff);
pub const LIGHTGOLDENRODYELLOW: ColorU8 = ColorU8::from_rgb(0xfa, 0xfa, 0xd2);
pub const LIGHTGRAY: ColorU8 = ColorU8::from_rgb(0xd3, 0xd3, 0xd3);
pub const LIGHTGREEN: ColorU8 = ColorU8::from_rgb(0x90, 0xee, 0x90);
pub const LIGHTGREY: ColorU8 = ColorU8::from_rgb(0xd3, 0xd3, 0xd3);
pub const LIGHTPINK: ColorU8 = ColorU8::from_rgb(0xff, 0xb6, 0xc1);
pub const LIGHTSALMON: ColorU8 = ColorU8::from_rgb(0xff, 0xa0, 0x7a);
pub const LIGHTSEAGREEN: ColorU8 = ColorU8::from_rgb(0x20, 0xb2, 0xaa);
pub const LIGHTSKYBLUE: ColorU8 = ColorU8::from_rgb(0x87, 0xce, 0xfa);
pub const LIGHTSLATEGRAY: ColorU8 = ColorU8::from_rgb(0x77, 0x88, 0x99);
pub const LIGHTSLATEGREY: ColorU8 = ColorU8::from_rgb(0x77, 0x88, 0x99);
pub const LIGHTSTEELBLUE: ColorU8 = ColorU8::from_rgb(0xb0, 0xc4, 0xde);
pub const LIGHTYELLOW: ColorU8 = ColorU8::from_rgb(0xff, 0xff, 0xe0);
pub const LIME: ColorU8 = ColorU8::from_rgb(0x00, 0xff, 0x00);
pub const LIMEGREEN: ColorU8 = ColorU8::from_rgb(0x32, 0xcd, 0x32);
pub const LINEN: ColorU8 = ColorU8::from_rgb(0xfa, 0xf0, 0xe6);
pub const MAGENTA: ColorU8 = ColorU8::from_rgb(0xff, 0x00, 0xff);
pub const MAROON: ColorU8 = ColorU8::from_rgb(0x80, 0x00, 0x00);
pub const MEDIUMAQUAMARINE: ColorU8 = ColorU8::from_rgb(0x66, 0xcd, 0xaa);
pub const MEDIUMBLUE: ColorU8 = ColorU8::from_rgb(0x00, 0x00, 0xcd);
pub const MEDIUMORCHID: ColorU8 = ColorU8::from_rgb(0xba, 0x55, 0xd3);
pub const MEDIUMPURPLE: ColorU8 = ColorU8::from_rgb(0x93, 0x70, 0xdb);
pub const MEDIUMSEAGREEN: ColorU8 = ColorU8::from_rgb(0x3c, 0xb3, 0x71);
pub const MEDIUMSLATEBLUE: ColorU8 = ColorU8::from_rgb(0x7b, 0x68, 0xee);
pub const MEDIUMSPRINGGREEN: ColorU8 = ColorU8::from_rgb(0x00, 0xfa, 0x9a);
pub const MEDIUMTURQUOISE: ColorU8 = ColorU8::from_rgb(0x48, 0xd1, 0xcc);
pub const MEDIUMVIOLETRED: ColorU8 = ColorU8::from_rgb(0xc7, 0x15, 0x85);
pub const MIDNIGHTBLUE: ColorU8 = ColorU8::from_rgb(0x19, 0x19, 0x70);
pub const MINTCREAM: ColorU8 = ColorU8::from_rgb(0xf5, 0xff, 0xfa);
pub const MISTYROSE: ColorU8 = ColorU8::from_rgb(0xff, 0xe4, 0xe1);
pub const MOCCASIN: ColorU8 = ColorU8::from_rgb(0xff, 0xe4, 0xb5);
pub const NAVAJOWHITE: ColorU8 = ColorU8::from_rgb(0xff, 0xde, 0xad);
pub const NAVY: ColorU8 = ColorU8::from_rgb(0x00, 0x00, 0x80);
pub const OLDLACE: ColorU8 = ColorU8::from_rgb(0xfd, 0xf5, 0xe6);
pub const OLIVE: ColorU8 = ColorU8::from_rgb(0x80, 0x80, 0x00);
pub const OLIVEDRAB: ColorU8 = ColorU8::from_rgb(0x6b, 0x8e, 0x23);
pub const ORANGE: ColorU8 = ColorU8::from_rgb(0xff, 0xa5, 0x00);
pub const ORANGERED: ColorU8 = ColorU8::from_rgb(0xff, 0x45, 0x00);
pub const ORCHID: ColorU8 = ColorU8::from_rgb(0xda, 0x70, 0xd6);
pub const PALEGOLDENROD: ColorU8 = ColorU8::from_rgb(0xee, 0xe8, 0xaa);
pub const PALEGREEN: ColorU8 = ColorU8::from_rgb(0x98, 0xfb, 0x98);
pub const PALETURQUOISE: ColorU8 = ColorU8::from_rgb(0xaf, 0xee, 0xee);
pub const PALEVIOLETRED: ColorU8 = ColorU8::from_rgb(0xdb, 0x70, 0x93);
pub const PAPAYAWHIP: ColorU8 = ColorU8::from_rgb(0xff, 0xef, 0xd5);
pub const PEACHPUFF: ColorU8 = ColorU8::from_rgb(0xff, 0xda, 0xb9);
pub const PERU: ColorU8 = ColorU8::from_rgb(0xcd, 0x85, 0x3f);
pub const PINK: ColorU8 = ColorU8::from_rgb(0xff, 0xc0, 0xcb);
pub const PLUM: ColorU8 = ColorU8::from_rgb(0xdd, 0xa0, 0xdd);
pub const POWDERBLUE: ColorU8 = ColorU8::from_rgb(0xb0, 0xe0, 0xe6);
pub const PURPLE: ColorU8 = ColorU8::from_rgb(0x80, 0x00, 0x80);
pub const REBECCAPURPLE: ColorU8 = ColorU8::from_rgb(0x66, 0x33, 0x99);
pub const RED: ColorU8 = ColorU8::from_rgb(0xff, 0x00, 0x00);
pub const ROSYBROWN: ColorU8 = ColorU8::from_rgb(0xbc, 0x8f, 0x8f);
pub const ROYALBLUE: ColorU8 = ColorU8::from_rgb(0x41, 0x69, 0xe1);
pub const SADDLEBROWN: ColorU8 = ColorU8::from_rgb(0x8b, 0x45, 0x13);
pub const SALMON: ColorU8 = ColorU8::from_rgb(0xfa, 0x80, 0x72);
pub const SANDYBROWN: ColorU8 = ColorU8::from_rgb(0xf4, 0xa4, 0x60);
pub const SEAGREEN: ColorU8 = ColorU8::from_rgb(0x2e, 0x8b, 0x57);
pub const SEASHELL: ColorU8 = ColorU8::from_rgb(0xff, 0xf5, 0xee);
pub const SIENNA: ColorU8 = ColorU8::from_rgb(0xa0, 0x52, 0x2d);
pub const SILVER: ColorU8 = ColorU8::from_rgb(0xc0, 0xc0, 0xc0);
pub const SKYBLUE: ColorU8 = ColorU8::from_rgb(0x87, 0xce, 0xeb);
pub const SLATEBLUE: ColorU8 = ColorU8::from_rgb(0x6a, 0x5a, 0xcd);
pub const SLATEGRAY: ColorU8 = ColorU8::from_rgb(0x70, 0x80, 0x90);
pub const SLATEGREY: ColorU8 = ColorU8::from_rgb(0x70, 0x80, 0x90);
pub const SNOW: ColorU8 = ColorU8::from_rgb(0xff, 0xfa, 0xfa);
pub const SPRINGGREEN: ColorU8 = ColorU8::from_rgb(0x00, 0xff, 0x7f);
pub const STEELBLUE: ColorU8 = ColorU8::from_rgb(0x46, 0x82, 0xb4);
pub const TAN: ColorU8 = ColorU8::from_rgb(0xd2, 0xb4, 0x8c);
pub const TEAL: ColorU8 = ColorU8::from_rgb(0x00, 0x80, 0x80);
pub const THISTLE: ColorU8 = ColorU8::from_rgb(0xd8, 0xbf, 0xd8);
pub const TOMATO: ColorU8 = ColorU8::from_rgb(0xff, 0x63, 0x47);
pub const TURQUOISE: ColorU8 = ColorU8::from_rgb(0x40, 0xe0, 0xd0);
pub const VIOLET: ColorU8 = ColorU8::from_rgb(0xee, 0x82, 0xee);
pub const WHEAT: ColorU8 = ColorU8::from_rgb(0xf5, 0xde, 0xb3);
pub const WHITE: ColorU8 = ColorU8::from_rgb(0xff, 0xff, 0xff);
pub const WHITESMOKE: ColorU8 = ColorU8::from_rgb(0xf5, 0xf5, 0xf5);
pub const YELLOW: ColorU8 = ColorU8::from_rgb(0xff, 0xff, 0x00);
pub const YELLOWGREEN: ColorU8 = ColorU8::from_rgb(0x9a, 0xcd, 0x32);

/// Keyword table, sorted by name for binary search
static NAMES: &[(&str, ColorU8)] = &[
    ("aliceblue", ALICEBLUE),
    ("antiquewhite", ANTIQUEWHITE),
    ("aqua", AQUA),
    ("aquamarine", AQUAMARINE),
    ("azure", AZURE),
    ("beige", BEIGE),
    ("bisque", BISQUE),
    ("black", BLACK),
    ("blanchedalmond", BLANCHEDALMOND),
    ("blue", BLUE),
    ("blueviolet", BLUEVIOLET),
    ("brown", BROWN),
    ("burlywood", BURLYWOOD),
    ("cadetblue", CADETBLUE),
    ("chartreuse", CHARTREUSE),
    ("chocolate", CHOCOLATE),
    ("coral", CORAL),
    ("cornflowerblue", CORNFLOWERBLUE),
    ("cornsilk", CORNSILK),
    ("crimson", CRIMSON),
    ("cyan", CYAN),
    ("darkblue", DARKBLUE),
    ("darkcyan", DARKCYAN),
    ("darkgoldenrod", DARKGOLDENROD),
    ("darkgray", DARKGRAY),
    ("darkgreen", DARKGREEN),
    ("darkgrey", DARKGREY),
    ("darkkhaki", DARKKHAKI),
    ("darkmagenta", DARKMAGENTA),
    ("darkolivegreen", DARKOLIVEGREEN),
    ("darkorange", DARKORANGE),
    ("darkorchid", DARKORCHID),
    ("darkred", DARKRED),
    ("darksalmon", DARKSALMON),
    ("darkseagreen", DARKSEAGREEN),
    ("darkslateblue", DARKSLATEBLUE),
    ("darkslategray", DARKSLATEGRAY),
    ("darkslategrey", DARKSLATEGREY),
    ("darkturquoise", DARKTURQUOISE),
    ("darkviolet", DARKVIOLET),
    ("deeppink", DEEPPINK),
    ("deepskyblue", DEEPSKYBLUE),
    ("dimgray", DIMGRAY),
    ("dimgrey", DIMGREY),
    ("dodgerblue", DODGERBLUE),
    ("firebrick", FIREBRICK),
    ("floralwhite", FLORALWHITE),
    ("forestgreen", FORESTGREEN),
    ("fuchsia", FUCHSIA),
    ("gainsboro", GAINSBORO),
    ("ghostwhite", GHOSTWHITE),
    ("gold", GOLD),
    ("goldenrod", GOLDENROD),
    ("gray", GRAY),
    ("green", GREEN),
    ("greenyellow", GREENYELLOW),
    ("grey", GREY),
    ("honeydew", HONEYDEW),
    ("hotpink", HOTPINK),
    ("indianred", INDIANRED),
    ("indigo", INDIGO),
    ("ivory", IVORY),
    ("khaki", KHAKI),
    ("lavender", LAVENDER),
    ("lavenderblush", LAVENDERBLUSH),
    ("lawngreen", LAWNGREEN),
    ("lemonchiffon", LEMONCHIFFON),
    ("lightblue", LIGHTBLUE),
    ("lightcoral", LIGHTCORAL),
    ("lightcyan", LIGHTCYAN),
    ("lightgoldenrodyellow", LIGHTGOLDENRODYELLOW),
    ("lightgray", LIGHTGRAY),
    ("lightgreen", LIGHTGREEN),
    ("lightgrey", LIGHTGREY),
    ("lightpink", LIGHTPINK),
    ("lightsalmon", LIGHTSALMON),
    ("lightseagreen", LIGHTSEAGREEN),
    ("lightskyblue", LIGHTSKYBLUE),
    ("lightslategray", LIGHTSLATEGRAY),
    ("lightslategrey", LIGHTSLATEGREY),
    ("lightsteelblue", LIGHTSTEELBLUE),
    ("lightyellow", LIGHTYELLOW),
    ("lime", LIME),
    ("limegreen", LIMEGREEN),
    ("linen", LINEN),
    ("magenta", MAGENTA),
    ("maroon", MAROON),
    ("mediumaquamarine", MEDIUMAQUAMARINE),
    ("mediumblue", MEDIUMBLUE),
    ("mediumorchid", MEDIUMORCHID),
    ("mediumpurple", MEDIUMPURPLE),
    ("mediumseagreen", MEDIUMSEAGREEN),
    ("mediumslateblue", MEDIUMSLATEBLUE),
    ("mediumspringgreen", MEDIUMSPRINGGREEN),
    ("mediumturquoise", MEDIUMTURQUOISE),
    ("mediumvioletred", MEDIUMVIOLETRED),
    ("midnightblue", MIDNIGHTBLUE),
    ("mintcream", MINTCREAM),
    ("mistyrose", MISTYROSE),
    ("moccasin", MOCCASIN),
    ("navajowhite", NAVAJOWHITE),
    ("navy", NAVY),
    ("oldlace", OLDLACE),
    ("olive", OLIVE),
    ("olivedrab", OLIVEDRAB),
    ("orange", ORANGE),
    ("orangered", ORANGERED),
    ("orchid", ORCHID),
    ("palegoldenrod", PALEGOLDENROD),
    ("palegreen", PALEGREEN),
    ("paleturquoise", PALETURQUOISE),
    ("palevioletred", PALEVIOLETRED),
    ("papayawhip", PAPAYAWHIP),
    ("peachpuff", PEACHPUFF),
    ("peru", PERU),
    ("pink", PINK),
    ("plum", PLUM),
    ("powderblue", POWDERBLUE),
    ("purple", PURPLE),
    ("rebeccapurple", REBECCAPURPLE),
    ("red", RED),
    ("rosybrown", ROSYBROWN),
    ("royalblue", ROYALBLUE),
    ("saddlebrown", SADDLEBROWN),
    ("salmon", SALMON),
    ("sandybrown", SANDYBROWN),
    ("seagreen", SEAGREEN),
    ("seashell", SEASHELL),
    ("sienna", SIENNA),
    ("silver", SILVER),
    ("skyblue", SKYBLUE),
    ("slateblue", SLATEBLUE),
    ("slategray", SLATEGRAY),
    ("slategrey", SLATEGREY),
    ("snow", SNOW),
    ("springgreen", SPRINGGREEN),
    ("steelblue", STEELBLUE),
    ("tan", TAN),
    ("teal", TEAL),
    ("thistle", THISTLE),
    ("tomato", TOMATO),
    ("turquoise", TURQUOISE),
    ("violet", VIOLET),
    ("wheat", WHEAT),
    ("white", WHITE),
    ("whitesmoke", WHITESMOKE),
    ("yellow", YELLOW),
    ("yellowgreen", YELLOWGREEN),
];

/// Look up a color keyword, ignoring ASCII case
pub fn lookup_name(name: &str) -> Option<ColorU8> {
    let name = name.to_ascii_lowercase();
    NAMES
        .binary_search_by(|(n, _)| (*n).cmp(name.as_str()))
        .ok()
        .map(|idx| NAMES[idx].1)
}

/// Iterate over all known color keywords, in alphabetical order
pub fn names() -> impl Iterator<Item = (&'static str, ColorU8)> {
    NAMES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(NAMES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn lookup() {
        assert_eq!(lookup_name("gray"), Some(GRAY));
        assert_eq!(lookup_name("GRAY"), Some(GRAY));
        assert_eq!(lookup_name("RebeccaPurple"), Some(REBECCAPURPLE));
        assert_eq!(lookup_name("aliceblue"), Some(ALICEBLUE));
        assert_eq!(lookup_name("yellowgreen"), Some(YELLOWGREEN));
        assert_eq!(lookup_name("grey"), lookup_name("gray"));
        assert_eq!(lookup_name("notacolor"), None);
        assert_eq!(lookup_name(""), None);
    }

    #[test]
    fn keywords_are_opaque() {
        assert_eq!(names().count(), 148);
        assert!(names().all(|(_, c)| c.alpha() == 255));
    }
}
