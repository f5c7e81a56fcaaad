//! Well-known configuration bundle keys.
//!
//! The override protocol accepts arbitrary keys; this module only names the
//! platform-defined strings the derived fact accessors read. Key names embed
//! the value kind as a suffix (`_bool`, `_int`, `_int_array`, `_string`)
//! following the platform's own convention.

/// Carrier allows VoLTE.
pub const CARRIER_VOLTE_AVAILABLE_BOOL: &str = "carrier_volte_available_bool";

/// Carrier allows Wi-Fi calling.
pub const CARRIER_WFC_IMS_AVAILABLE_BOOL: &str = "carrier_wfc_ims_available_bool";

/// Wi-Fi calling enabled by default while roaming.
pub const CARRIER_DEFAULT_WFC_IMS_ROAMING_ENABLED_BOOL: &str =
    "carrier_default_wfc_ims_roaming_enabled_bool";

/// Carrier allows video calling.
pub const CARRIER_VT_AVAILABLE_BOOL: &str = "carrier_vt_available_bool";

/// Carrier permits user-added APN entries.
pub const ALLOW_ADDING_APNS_BOOL: &str = "allow_adding_apns_bool";

/// Carrier supports the wifi-only Wi-Fi calling mode.
pub const CARRIER_WFC_SUPPORTS_WIFI_ONLY_BOOL: &str = "carrier_wfc_supports_wifi_only_bool";

/// Wi-Fi calling preference is user-editable.
pub const EDITABLE_WFC_MODE_BOOL: &str = "editable_wfc_mode_bool";

/// Roaming Wi-Fi calling preference is user-editable.
pub const EDITABLE_WFC_ROAMING_MODE_BOOL: &str = "editable_wfc_roaming_mode_bool";

/// Operator name format index shown during Wi-Fi calling.
pub const WFC_SPN_FORMAT_IDX_INT: &str = "wfc_spn_format_idx_int";

/// Show the Wi-Fi calling icon in the status bar.
pub const SHOW_WIFI_CALLING_ICON_IN_STATUS_BAR_BOOL: &str =
    "show_wifi_calling_icon_in_status_bar_bool";

/// Show IMS registration state in SIM status.
pub const SHOW_IMS_REGISTRATION_STATUS_BOOL: &str = "show_ims_registration_status_bool";

/// Supplementary services go over UT.
pub const CARRIER_SUPPORTS_SS_OVER_UT_BOOL: &str = "carrier_supports_ss_over_ut_bool";

/// Supplementary services supported over CDMA.
pub const SUPPORT_SS_OVER_CDMA_BOOL: &str = "support_ss_over_cdma_bool";

/// Always show the data RAT icon.
pub const ALWAYS_SHOW_DATA_RAT_ICON_BOOL: &str = "always_show_data_rat_icon_bool";

/// Brand the LTE data icon as 4G.
pub const SHOW_4G_FOR_LTE_DATA_ICON_BOOL: &str = "show_4g_for_lte_data_icon_bool";

/// Suppress the LTE+ variant of the data icon.
pub const HIDE_LTE_PLUS_DATA_ICON_BOOL: &str = "hide_lte_plus_data_icon_bool";

/// Enhanced 4G LTE toggle is user-editable.
pub const EDITABLE_ENHANCED_4G_LTE_BOOL: &str = "editable_enhanced_4g_lte_bool";

/// Enhanced 4G LTE defaults to on.
pub const ENHANCED_4G_LTE_ON_BY_DEFAULT_BOOL: &str = "enhanced_4g_lte_on_by_default_bool";

/// Hide the enhanced 4G LTE toggle entirely.
pub const HIDE_ENHANCED_4G_LTE_BOOL: &str = "hide_enhanced_4g_lte_bool";

/// NR availability modes (NSA = 1, SA = 2) the carrier enables.
pub const CARRIER_NR_AVAILABILITIES_INT_ARRAY: &str = "carrier_nr_availabilities_int_array";

/// Carrier allows VoNR.
pub const VONR_ENABLED_BOOL: &str = "vonr_enabled_bool";

/// VoNR toggle is visible to the user.
pub const VONR_SETTING_VISIBILITY_BOOL: &str = "vonr_setting_visibility_bool";

/// Carrier allows IMS calling across SIMs.
pub const CARRIER_CROSS_SIM_IMS_AVAILABLE_BOOL: &str = "carrier_cross_sim_ims_available_bool";

/// Cross-SIM calling may ride on opportunistic data.
pub const ENABLE_CROSS_SIM_CALLING_ON_OPPORTUNISTIC_DATA_BOOL: &str =
    "enable_cross_sim_calling_on_opportunistic_data_bool";

/// IMS stack user agent string. Not part of the documented key schema but
/// honored by common IMS implementations.
pub const IMS_USER_AGENT_STRING: &str = "ims.ims_user_agent_string";
