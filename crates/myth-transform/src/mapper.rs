//! Whole-record mapping from a raw catalog row to a normalized figurine.

use myth_model::figurine::Figurine;
use myth_model::source::SourceFigurine;
use myth_model::vocabulary::{ANNIVERSARIES, CATEGORIES, DISTRIBUTION_CHANNELS, LINE_UPS, SERIES};

use crate::distribution::{primary_distribution, secondary_distribution};
use crate::error::Result;
use crate::normalization::text::{non_blank, parse_flag, split_list};
use crate::normalization::vocabulary::resolve;

/// Maps one raw catalog row to a [`Figurine`].
///
/// Field-level parsers degrade blank and unrecognized values to absent; a
/// malformed date (or decimal remainder) aborts the whole record and no
/// partially-built figurine escapes.
pub fn map_figurine(source: &SourceFigurine) -> Result<Figurine> {
    Ok(Figurine {
        base_name: source.base_name.clone(),

        distribution_jpy: primary_distribution(source)?,
        distribution_mxn: secondary_distribution(source)?,

        tamashii_url: non_blank(source.link.as_deref()),
        distribution_channel: resolve(
            &DISTRIBUTION_CHANNELS,
            source.dist.as_deref(),
            "Distribution",
        ),
        line_up: resolve(&LINE_UPS, source.line_up.as_deref(), "LineUp"),
        series: resolve(&SERIES, source.series.as_deref(), "Series"),
        category: resolve(&CATEGORIES, source.group.as_deref(), "Group"),

        metal: parse_flag(source.metal.as_deref()),
        oce: parse_flag(source.oce.as_deref()),
        revival: parse_flag(source.revival.as_deref()),
        plain: parse_flag(source.plain_cloth.as_deref()),
        broken: parse_flag(source.broken.as_deref()),
        golden: parse_flag(source.golden.as_deref()),
        gold: parse_flag(source.gold.as_deref()),
        hk: parse_flag(source.hk.as_deref()),
        comic: parse_flag(source.manga.as_deref()),
        set: parse_flag(source.set.as_deref()),

        anniversary: resolve(&ANNIVERSARIES, source.anniversary.as_deref(), "Anniversary"),

        official_images: split_list(source.official_images.as_deref()),
        other_images: split_list(source.other_images.as_deref()),
        remarks: non_blank(source.remarks.as_deref()),
    })
}
