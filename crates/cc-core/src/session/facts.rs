//! Derived configuration facts.
//!
//! Each fact is a fixed expression over one or more resolved configuration
//! values, named after the platform behavior it controls. Facts inherit the
//! session read semantics: they never fail, degrading to `false` / `""` /
//! `-1` when the subscription is invalid or the platform is unreachable.
//!
//! Facts marked with a minimum platform level are caller contracts, checked
//! with `debug_assert!`: the keys they read do not exist on earlier builds,
//! so the answer there would be meaningless rather than wrong. The one
//! exception is [`cross_sim_enabled`](super::SubscriptionSession::cross_sim_enabled),
//! which the platform defines as a runtime check that is simply `false` on
//! earlier builds.

use super::SubscriptionSession;
use cc_common::{keys, ApiLevel};

/// NR availability modes meaning "both NSA and SA enabled". Order matters:
/// the platform treats the sequence positionally.
const NR_MODES_NSA_AND_SA: [i32; 2] = [1, 2];

impl SubscriptionSession {
    /// Carrier allows VoLTE.
    pub fn volte_enabled(&self) -> bool {
        self.bool_value(keys::CARRIER_VOLTE_AVAILABLE_BOOL)
    }

    /// Carrier allows Wi-Fi calling.
    pub fn vowifi_enabled(&self) -> bool {
        self.bool_value(keys::CARRIER_WFC_IMS_AVAILABLE_BOOL)
    }

    /// Wi-Fi calling stays available while roaming.
    pub fn vowifi_while_roaming_enabled(&self) -> bool {
        self.bool_value(keys::CARRIER_DEFAULT_WFC_IMS_ROAMING_ENABLED_BOOL)
    }

    /// Carrier allows video calling.
    pub fn vt_enabled(&self) -> bool {
        self.bool_value(keys::CARRIER_VT_AVAILABLE_BOOL)
    }

    /// Carrier permits user-added APN entries.
    pub fn allow_adding_apns(&self) -> bool {
        self.bool_value(keys::ALLOW_ADDING_APNS_BOOL)
    }

    /// Carrier supports the wifi-only Wi-Fi calling mode.
    pub fn wfc_wifi_only_supported(&self) -> bool {
        self.bool_value(keys::CARRIER_WFC_SUPPORTS_WIFI_ONLY_BOOL)
    }

    /// Supplementary services are carried over UT.
    pub fn ss_over_ut_enabled(&self) -> bool {
        self.bool_value(keys::CARRIER_SUPPORTS_SS_OVER_UT_BOOL)
    }

    /// Supplementary services are supported over CDMA.
    pub fn ss_over_cdma_enabled(&self) -> bool {
        self.bool_value(keys::SUPPORT_SS_OVER_CDMA_BOOL)
    }

    /// Status bar shows a Wi-Fi calling icon.
    pub fn show_vowifi_icon(&self) -> bool {
        self.bool_value(keys::SHOW_WIFI_CALLING_ICON_IN_STATUS_BAR_BOOL)
    }

    /// Operator name format index used during Wi-Fi calling. `-1` when
    /// unavailable, `0` when the carrier leaves it unset.
    pub fn wfc_spn_format_index(&self) -> i32 {
        self.i32_value(keys::WFC_SPN_FORMAT_IDX_INT)
    }

    /// User agent the IMS stack presents. `""` when unset or unavailable.
    pub fn ims_user_agent(&self) -> String {
        self.string_value(keys::IMS_USER_AGENT_STRING)
    }

    /// The enhanced 4G (LTE+) experience is effectively on: the toggle is
    /// user-editable, defaults to on, and is not hidden. All three flags
    /// must agree.
    pub fn enhanced_4g_plus_enabled(&self) -> bool {
        self.bool_value(keys::EDITABLE_ENHANCED_4G_LTE_BOOL)
            && self.bool_value(keys::ENHANCED_4G_LTE_ON_BY_DEFAULT_BOOL)
            && !self.bool_value(keys::HIDE_ENHANCED_4G_LTE_BOOL)
    }

    /// SIM status shows IMS registration state.
    ///
    /// Requires platform level [`ApiLevel::PERSISTENT_OVERRIDES`].
    pub fn show_ims_in_sim_info(&self) -> bool {
        self.assert_level(ApiLevel::PERSISTENT_OVERRIDES, "show_ims_in_sim_info");
        self.bool_value(keys::SHOW_IMS_REGISTRATION_STATUS_BOOL)
    }

    /// Wi-Fi calling preference is user-editable.
    ///
    /// Requires platform level [`ApiLevel::PERSISTENT_OVERRIDES`].
    pub fn vowifi_mode_editable(&self) -> bool {
        self.assert_level(ApiLevel::PERSISTENT_OVERRIDES, "vowifi_mode_editable");
        self.bool_value(keys::EDITABLE_WFC_MODE_BOOL)
    }

    /// Roaming Wi-Fi calling preference is user-editable.
    ///
    /// Requires platform level [`ApiLevel::PERSISTENT_OVERRIDES`].
    pub fn vowifi_roaming_mode_editable(&self) -> bool {
        self.assert_level(
            ApiLevel::PERSISTENT_OVERRIDES,
            "vowifi_roaming_mode_editable",
        );
        self.bool_value(keys::EDITABLE_WFC_ROAMING_MODE_BOOL)
    }

    /// Data RAT icon is always shown.
    ///
    /// Requires platform level [`ApiLevel::PERSISTENT_OVERRIDES`].
    pub fn always_show_data_rat_icon(&self) -> bool {
        self.assert_level(ApiLevel::PERSISTENT_OVERRIDES, "always_show_data_rat_icon");
        self.bool_value(keys::ALWAYS_SHOW_DATA_RAT_ICON_BOOL)
    }

    /// LTE data icon is branded as 4G.
    ///
    /// Requires platform level [`ApiLevel::PERSISTENT_OVERRIDES`].
    pub fn show_4g_for_lte(&self) -> bool {
        self.assert_level(ApiLevel::PERSISTENT_OVERRIDES, "show_4g_for_lte");
        self.bool_value(keys::SHOW_4G_FOR_LTE_DATA_ICON_BOOL)
    }

    /// LTE+ variant of the data icon is suppressed.
    ///
    /// Requires platform level [`ApiLevel::PERSISTENT_OVERRIDES`].
    pub fn hide_enhanced_data_icon(&self) -> bool {
        self.assert_level(ApiLevel::PERSISTENT_OVERRIDES, "hide_enhanced_data_icon");
        self.bool_value(keys::HIDE_LTE_PLUS_DATA_ICON_BOOL)
    }

    /// Carrier enables NR in both NSA and SA modes.
    ///
    /// True only when the availability sequence is exactly `[1, 2]`; a
    /// subset, a reordering, or extra modes all read as `false`.
    ///
    /// Requires platform level [`ApiLevel::NR_AVAILABILITY`].
    pub fn nr_enabled(&self) -> bool {
        self.assert_level(ApiLevel::NR_AVAILABILITY, "nr_enabled");
        self.i32_seq_value(keys::CARRIER_NR_AVAILABILITIES_INT_ARRAY) == NR_MODES_NSA_AND_SA
    }

    /// IMS calling may ride the other SIM's data connection.
    ///
    /// Unlike the other gated facts this one is a runtime check: on
    /// platforms below [`ApiLevel::CROSS_SIM`] it is `false` without any
    /// remote call.
    pub fn cross_sim_enabled(&self) -> bool {
        if !self.api_level().supports(ApiLevel::CROSS_SIM) {
            return false;
        }
        self.bool_value(keys::CARRIER_CROSS_SIM_IMS_AVAILABLE_BOOL)
            && self.bool_value(keys::ENABLE_CROSS_SIM_CALLING_ON_OPPORTUNISTIC_DATA_BOOL)
    }

    /// Carrier enables VoNR and surfaces the toggle to the user.
    ///
    /// Requires platform level [`ApiLevel::VONR_VISIBILITY`].
    pub fn vonr_enabled(&self) -> bool {
        self.assert_level(ApiLevel::VONR_VISIBILITY, "vonr_enabled");
        self.bool_value(keys::VONR_ENABLED_BOOL)
            && self.bool_value(keys::VONR_SETTING_VISIBILITY_BOOL)
    }

    fn assert_level(&self, min: ApiLevel, fact: &'static str) {
        debug_assert!(
            self.api_level().supports(min),
            "{fact} requires platform level {min}, probe reports {}",
            self.api_level()
        );
    }
}
