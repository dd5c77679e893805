use std::fmt;

use crate::common::byte_enum;

byte_enum! {
    /// Proactive command kinds, bound to their ETSI TS 102.223 type codes.
    pub enum CommandType {
        Refresh = 0x01 => "REFRESH",
        SetUpEventList = 0x05 => "SET_UP_EVENT_LIST",
        SetUpCall = 0x10 => "SET_UP_CALL",
        SendSs = 0x11 => "SEND_SS",
        SendUssd = 0x12 => "SEND_USSD",
        SendSms = 0x13 => "SEND_SMS",
        SendDtmf = 0x14 => "SEND_DTMF",
        LaunchBrowser = 0x15 => "LAUNCH_BROWSER",
        PlayTone = 0x20 => "PLAY_TONE",
        DisplayText = 0x21 => "DISPLAY_TEXT",
        GetInkey = 0x22 => "GET_INKEY",
        GetInput = 0x23 => "GET_INPUT",
        SelectItem = 0x24 => "SELECT_ITEM",
        SetUpMenu = 0x25 => "SET_UP_MENU",
        ProvideLocalInformation = 0x26 => "PROVIDE_LOCAL_INFORMATION",
        SetUpIdleModeText = 0x28 => "SET_UP_IDLE_MODE_TEXT",
        LanguageNotification = 0x35 => "LANGUAGE_NOTIFICATION",
        OpenChannel = 0x40 => "OPEN_CHANNEL",
        CloseChannel = 0x41 => "CLOSE_CHANNEL",
        ReceiveData = 0x42 => "RECEIVE_DATA",
        SendData = 0x43 => "SEND_DATA",
        GetChannelStatus = 0x44 => "GET_CHANNEL_STATUS",
    }
}

impl CommandType {
    /// Looks up a type-of-command byte. Unknown codes (future or vendor
    /// commands) are `None`, not an error.
    ///
    /// # Examples
    /// ```
    /// use stk_core::CommandType;
    ///
    /// assert_eq!(CommandType::from_code(0x21), Some(CommandType::DisplayText));
    /// assert_eq!(CommandType::from_code(0xFF), None);
    /// ```
    pub const fn from_code(code: u8) -> Option<Self> {
        Self::from_value(code)
    }

    pub const fn code(self) -> u8 {
        self.value()
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
