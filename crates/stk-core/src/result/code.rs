use std::fmt;

use crate::common::byte_enum;

byte_enum! {
    /// General result of a proactive command, as reported in a TERMINAL RESPONSE.
    ///
    /// Values follow ETSI TS 102.223 §8.12.
    pub enum ResultCode {
        Ok = 0x00 => "OK",
        PrfrmdWithPartialComprehension = 0x01 => "PRFRMD_WITH_PARTIAL_COMPREHENSION",
        PrfrmdWithMissingInfo = 0x02 => "PRFRMD_WITH_MISSING_INFO",
        PrfrmdWithAdditionalEfsRead = 0x03 => "PRFRMD_WITH_ADDITIONAL_EFS_READ",
        PrfrmdIconNotDisplayed = 0x04 => "PRFRMD_ICON_NOT_DISPLAYED",
        PrfrmdModifiedByNaa = 0x05 => "PRFRMD_MODIFIED_BY_NAA",
        PrfrmdLimitedService = 0x06 => "PRFRMD_LIMITED_SERVICE",
        PrfrmdWithModification = 0x07 => "PRFRMD_WITH_MODIFICATION",
        PrfrmdNaaNotActive = 0x08 => "PRFRMD_NAA_NOT_ACTIVE",
        PrfrmdToneNotPlayed = 0x09 => "PRFRMD_TONE_NOT_PLAYED",
        UiccSessionTermByUser = 0x10 => "UICC_SESSION_TERM_BY_USER",
        BackwardMoveByUser = 0x11 => "BACKWARD_MOVE_BY_USER",
        NoResponseFromUser = 0x12 => "NO_RESPONSE_FROM_USER",
        HelpInfoRequired = 0x13 => "HELP_INFO_REQUIRED",
        UssdSsSessionTermByUser = 0x14 => "USSD_SS_SESSION_TERM_BY_USER",
        TerminalCrntlyUnableToProcess = 0x20 => "TERMINAL_CRNTLY_UNABLE_TO_PROCESS",
        NetworkCrntlyUnableToProcess = 0x21 => "NETWORK_CRNTLY_UNABLE_TO_PROCESS",
        UserNotAccept = 0x22 => "USER_NOT_ACCEPT",
        UserClearDownCall = 0x23 => "USER_CLEAR_DOWN_CALL",
        ContradictionWithTimer = 0x24 => "CONTRADICTION_WITH_TIMER",
        NaaCallControlTemporary = 0x25 => "NAA_CALL_CONTROL_TEMPORARY",
        LaunchBrowserError = 0x26 => "LAUNCH_BROWSER_ERROR",
        MmsTemporary = 0x27 => "MMS_TEMPORARY",
        BeyondTerminalCapability = 0x30 => "BEYOND_TERMINAL_CAPABILITY",
        CmdTypeNotUnderstood = 0x31 => "CMD_TYPE_NOT_UNDERSTOOD",
        CmdDataNotUnderstood = 0x32 => "CMD_DATA_NOT_UNDERSTOOD",
        CmdNumNotKnown = 0x33 => "CMD_NUM_NOT_KNOWN",
        SsReturnError = 0x34 => "SS_RETURN_ERROR",
        SmsRpError = 0x35 => "SMS_RP_ERROR",
        RequiredValuesMissing = 0x36 => "REQUIRED_VALUES_MISSING",
        UssdReturnError = 0x37 => "USSD_RETURN_ERROR",
        MultiCardsCmdError = 0x38 => "MULTI_CARDS_CMD_ERROR",
        UsimCallControlPermanent = 0x39 => "USIM_CALL_CONTROL_PERMANENT",
        BipError = 0x3A => "BIP_ERROR",
        AccessTechUnableToProcess = 0x3B => "ACCESS_TECH_UNABLE_TO_PROCESS",
        FramesError = 0x3C => "FRAMES_ERROR",
        MmsError = 0x3D => "MMS_ERROR",
    }
}

impl ResultCode {
    /// Results '20', '21', '26', '38', '39', '3A', '3C' and '3D' must carry a
    /// specific cause value as additional information (ETSI TS 102.223 §8.12).
    pub const fn requires_additional_info(self) -> bool {
        matches!(
            self,
            ResultCode::TerminalCrntlyUnableToProcess
                | ResultCode::NetworkCrntlyUnableToProcess
                | ResultCode::LaunchBrowserError
                | ResultCode::MultiCardsCmdError
                | ResultCode::UsimCallControlPermanent
                | ResultCode::BipError
                | ResultCode::FramesError
                | ResultCode::MmsError
        )
    }

    /// `true` for the "command performed" range ('0X').
    pub const fn is_success(self) -> bool {
        self.value() <= 0x0F
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02X})", self.name(), self.value())
    }
}
