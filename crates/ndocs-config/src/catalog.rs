//! Built-in page catalog.

/// Notion page IDs served when `ndocs.toml` has no `[catalog]` section.
pub const DEFAULT_PAGE_IDS: &[&str] = &[
    "6f09a80ccaa54bcb87fbbd22c3771de1", // Common problems
    "fd29cb44c260407bb1fc85bb818e5562", // Integrations main page
    "cf70e76a367b48f98e6e244d5230b4cf", // Shopify
    "4d03fa1671594f2197172dd0936a713d", // Funnelish
    "2c28311a76864bd3b30cae1e4108a938", // External checkouts
    "f50042e583e942b6834a3236b85769fe", // Meta Ads
    "097b9181305046ad8082f14211e4078a", // Google Ads
    "c6cbf58297a24575a39f5ac08e2fc412", // Pinterest Ads
    "cbab069422d34bf6b67dda3b7a5adc15", // X Ads
    "da202a7f20b64d42904662c39e2ab13c", // TikTok Ads
    "03645f24daf44becb126e3a52ba0b921", // Snapchat Ads
    "4d78b88568c34c20b9f0eb8d1dd2c488", // Klaviyo
    "1af47097eaf080e28c27e4d313a1f7d1", // Reddit Ads
    "872c79a3d6e54273aecef221755f1d07", // Advertorials
];

/// Owned copy of [`DEFAULT_PAGE_IDS`].
pub(crate) fn default_pages() -> Vec<String> {
    DEFAULT_PAGE_IDS.iter().map(|&id| id.to_owned()).collect()
}
