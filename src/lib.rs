#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]
/*!
 * # chromap
 * _data to color mapping_ for visualization surfaces.
 *
 * Chromap turns columns of numeric or categorical values into colors,
 * using a palette and a pluggable resolution strategy.
 * Two outputs are produced:
 *  - `#rrggbb` hex strings, one per value, for generic downstream use
 *  - a packed RGBA byte buffer, 4 bytes per value, for direct upload to a pixel surface
 *
 * ## Get started
 *
 * ```
 * use chromap::{ColorMapper, Config, resolve};
 *
 * // The configuration only describes colors, they are checked when the mapper is built.
 * let config = Config::new()
 *     .with_palette(["#440154", "#21918c", "#fde725"])
 *     .with_nan_color("gray");
 *
 * // Bin the values linearly between 0 and 3
 * let mapper = ColorMapper::new(config, resolve::Linear::new().with_range(0.0, 3.0)).unwrap();
 *
 * let data = vec![0.5, 1.5, f64::NAN, 2.5];
 * assert_eq!(
 *     mapper.to_hex(&data),
 *     vec!["#440154", "#21918c", "#808080", "#fde725"]
 * );
 *
 * // RGBA bytes, ready for a pixel surface
 * let buf = mapper.to_buffer(&data);
 * assert_eq!(buf.len(), 4 * data.len());
 * assert_eq!(&buf[..4], &[0x44, 0x01, 0x54, 0xff]);
 * ```
 *
 * ## Crate features
 *
 *  - `data-polars`: enables [Polars](https://pola.rs) `Series` as data columns (See `data::polars`)
 *    pulls in the `polars` dependency, which is quite a beast to compile.
 *  - `diag`: color parse errors implement `miette::Diagnostic`
 *
 * ## Notes about chromap's design
 *
 * The [`ColorMapper`] does not decide which palette entry a value gets.
 * This is the job of a [`resolve::ResolveValues`] strategy, given at construction.
 * [`resolve::Linear`], [`resolve::Log`] and [`resolve::Categorical`] are provided,
 * and any closure can be turned into one with [`resolve::from_fn`].
 *
 * The palette is an immutable [`palette::Palette`] snapshot, rebuilt from the
 * [`Config`] on every change. An invalid change is rejected as a whole and leaves
 * the mapper untouched.
 *
 * Rendering surfaces are in separate crates (see `chromap-pxl`).
 */
// chromap is released under the MIT License

pub mod config;
pub mod data;
pub mod mapper;
pub mod pack;
pub mod palette;
pub mod resolve;

pub use config::Config;
pub use mapper::{ColorMapper, Error};
pub use pack::ByteOrder;

/// Rexports of [`chromap_base::color`]` items
pub mod color {
    pub use chromap_base::color::*;
}
pub use color::{ColorSpec, ColorU8, PackedColor};
