//! Raw catalog record as exported from the source spreadsheet.

use serde::{Deserialize, Serialize};

/// One raw catalog row, all fields string-valued.
///
/// Field renames reproduce the export's column headers exactly, so a
/// CSV/JSON binding layer can deserialize rows directly into this type.
/// `base_name` is the only required column; its non-blank constraint is
/// enforced by upstream validation. The record is immutable input to the
/// mapping engine and is never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceFigurine {
    #[serde(rename = "Base Name")]
    pub base_name: String,

    #[serde(rename = "Price (JPY)")]
    pub price_jpy: Option<String>,

    #[serde(rename = "Announcement (JPY)")]
    pub ann_jpy: Option<String>,

    #[serde(rename = "Preorder (JPY)")]
    pub preorder_jpy: Option<String>,

    #[serde(rename = "Release (JPY)")]
    pub release_jpy: Option<String>,

    #[serde(rename = "Distributor (MXN)")]
    pub distributor_mxn: Option<String>,

    #[serde(rename = "Price (MXN)")]
    pub price_mxn: Option<String>,

    #[serde(rename = "Preorder (MXN)")]
    pub preorder_mxn: Option<String>,

    #[serde(rename = "Release (MXN)")]
    pub release_mxn: Option<String>,

    #[serde(rename = "Link")]
    pub link: Option<String>,

    #[serde(rename = "Distribution")]
    pub dist: Option<String>,

    #[serde(rename = "LineUp")]
    pub line_up: Option<String>,

    #[serde(rename = "Series")]
    pub series: Option<String>,

    #[serde(rename = "Group")]
    pub group: Option<String>,

    #[serde(rename = "Metal")]
    pub metal: Option<String>,

    #[serde(rename = "OCE")]
    pub oce: Option<String>,

    #[serde(rename = "Revival")]
    pub revival: Option<String>,

    #[serde(rename = "PlainCloth")]
    pub plain_cloth: Option<String>,

    #[serde(rename = "Broken")]
    pub broken: Option<String>,

    #[serde(rename = "Golden")]
    pub golden: Option<String>,

    #[serde(rename = "Gold")]
    pub gold: Option<String>,

    #[serde(rename = "HK")]
    pub hk: Option<String>,

    #[serde(rename = "Manga")]
    pub manga: Option<String>,

    #[serde(rename = "Set")]
    pub set: Option<String>,

    #[serde(rename = "Anniversary")]
    pub anniversary: Option<String>,

    #[serde(rename = "Official Images")]
    pub official_images: Option<String>,

    #[serde(rename = "Other Images")]
    pub other_images: Option<String>,

    #[serde(rename = "Remarks")]
    pub remarks: Option<String>,
}
