use tour_core::AssetId;

pub const JETPACK_LOGO: AssetId = AssetId("jetpack_logo");
pub const HCM_UT: AssetId = AssetId("hcm_ut");
pub const HCM_UTT: AssetId = AssetId("hcm_utt");
