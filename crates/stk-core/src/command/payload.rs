use std::time::Duration;

use crate::icon::IconId;

use super::kind::CommandType;

/// Text shown or confirmed for a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextMessage {
    pub title: Option<String>,
    pub text: Option<String>,
    pub icon: Option<IconId>,
    pub is_high_priority: bool,
    pub response_needed: bool,
    pub user_clear: bool,
    pub duration: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: u8,
    pub text: String,
    pub icon: Option<IconId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    pub title: Option<String>,
    pub title_icon: Option<IconId>,
    pub items: Vec<MenuItem>,
    pub default_item: Option<u8>,
    pub help_available: bool,
    pub soft_key_preferred: bool,
}

/// What GET INKEY and GET INPUT ask the user for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRequest {
    pub prompt: TextMessage,
    pub default_text: Option<String>,
    pub min_len: u8,
    pub max_len: u8,
    pub digits_only: bool,
    pub ucs2: bool,
    pub packed: bool,
    pub echo: bool,
    pub yes_no: bool,
    pub help_available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchBrowserMode {
    LaunchIfNotAlreadyLaunched,
    UseExistingBrowser,
    LaunchNewBrowser,
}

/// Alpha identifier shown while a BIP channel command runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelActivity {
    pub text: TextMessage,
    pub has_alpha_id: bool,
}

/// Command-specific parameters, one variant per [`CommandType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandPayload {
    Refresh,
    SetUpEventList { events: Vec<u8> },
    SetUpCall { confirm: TextMessage, call: TextMessage },
    SendSs { text: TextMessage },
    SendUssd { text: TextMessage },
    SendSms { text: TextMessage },
    SendDtmf { text: TextMessage },
    LaunchBrowser {
        confirm: TextMessage,
        url: Option<String>,
        mode: LaunchBrowserMode,
    },
    PlayTone {
        text: TextMessage,
        tone: Option<u8>,
        duration: Option<Duration>,
    },
    DisplayText { text: TextMessage },
    GetInkey { input: InputRequest },
    GetInput { input: InputRequest },
    SelectItem { menu: Menu, load_title_icon: bool },
    SetUpMenu { menu: Menu },
    ProvideLocalInformation,
    SetUpIdleModeText { text: TextMessage },
    LanguageNotification { language: Option<String> },
    OpenChannel(ChannelActivity),
    CloseChannel(ChannelActivity),
    ReceiveData(ChannelActivity),
    SendData(ChannelActivity),
    GetChannelStatus(ChannelActivity),
}

impl CommandPayload {
    pub fn command_type(&self) -> CommandType {
        match self {
            CommandPayload::Refresh => CommandType::Refresh,
            CommandPayload::SetUpEventList { .. } => CommandType::SetUpEventList,
            CommandPayload::SetUpCall { .. } => CommandType::SetUpCall,
            CommandPayload::SendSs { .. } => CommandType::SendSs,
            CommandPayload::SendUssd { .. } => CommandType::SendUssd,
            CommandPayload::SendSms { .. } => CommandType::SendSms,
            CommandPayload::SendDtmf { .. } => CommandType::SendDtmf,
            CommandPayload::LaunchBrowser { .. } => CommandType::LaunchBrowser,
            CommandPayload::PlayTone { .. } => CommandType::PlayTone,
            CommandPayload::DisplayText { .. } => CommandType::DisplayText,
            CommandPayload::GetInkey { .. } => CommandType::GetInkey,
            CommandPayload::GetInput { .. } => CommandType::GetInput,
            CommandPayload::SelectItem { .. } => CommandType::SelectItem,
            CommandPayload::SetUpMenu { .. } => CommandType::SetUpMenu,
            CommandPayload::ProvideLocalInformation => CommandType::ProvideLocalInformation,
            CommandPayload::SetUpIdleModeText { .. } => CommandType::SetUpIdleModeText,
            CommandPayload::LanguageNotification { .. } => CommandType::LanguageNotification,
            CommandPayload::OpenChannel(_) => CommandType::OpenChannel,
            CommandPayload::CloseChannel(_) => CommandType::CloseChannel,
            CommandPayload::ReceiveData(_) => CommandType::ReceiveData,
            CommandPayload::SendData(_) => CommandType::SendData,
            CommandPayload::GetChannelStatus(_) => CommandType::GetChannelStatus,
        }
    }

    /// Icons a terminal has to load before presenting this command.
    pub fn icon_ids(&self) -> Vec<IconId> {
        match self {
            CommandPayload::SetUpCall { confirm, call } => {
                confirm.icon.into_iter().chain(call.icon).collect()
            }
            CommandPayload::SendSs { text }
            | CommandPayload::SendUssd { text }
            | CommandPayload::SendSms { text }
            | CommandPayload::SendDtmf { text }
            | CommandPayload::PlayTone { text, .. }
            | CommandPayload::DisplayText { text }
            | CommandPayload::SetUpIdleModeText { text } => text.icon.into_iter().collect(),
            CommandPayload::LaunchBrowser { confirm, .. } => confirm.icon.into_iter().collect(),
            CommandPayload::GetInkey { input } | CommandPayload::GetInput { input } => {
                input.prompt.icon.into_iter().collect()
            }
            CommandPayload::SelectItem { menu, .. } | CommandPayload::SetUpMenu { menu } => menu
                .title_icon
                .into_iter()
                .chain(menu.items.iter().filter_map(|item| item.icon))
                .collect(),
            CommandPayload::OpenChannel(activity)
            | CommandPayload::CloseChannel(activity)
            | CommandPayload::ReceiveData(activity)
            | CommandPayload::SendData(activity)
            | CommandPayload::GetChannelStatus(activity) => {
                activity.text.icon.into_iter().collect()
            }
            CommandPayload::Refresh
            | CommandPayload::SetUpEventList { .. }
            | CommandPayload::ProvideLocalInformation
            | CommandPayload::LanguageNotification { .. } => Vec::new(),
        }
    }
}
