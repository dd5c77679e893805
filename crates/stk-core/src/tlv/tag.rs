use crate::common::byte_enum;

byte_enum! {
    /// Known COMPREHENSION-TLV tag values (comprehension-required bit cleared).
    pub enum ComprehensionTlvTag {
        CommandDetails = 0x01 => "COMMAND_DETAILS",
        DeviceIdentities = 0x02 => "DEVICE_IDENTITIES",
        Result = 0x03 => "RESULT",
        Duration = 0x04 => "DURATION",
        AlphaId = 0x05 => "ALPHA_ID",
        Address = 0x06 => "ADDRESS",
        UssdString = 0x0A => "USSD_STRING",
        SmsTpdu = 0x0B => "SMS_TPDU",
        TextString = 0x0D => "TEXT_STRING",
        Tone = 0x0E => "TONE",
        Item = 0x0F => "ITEM",
        ItemId = 0x10 => "ITEM_ID",
        ResponseLength = 0x11 => "RESPONSE_LENGTH",
        FileList = 0x12 => "FILE_LIST",
        HelpRequest = 0x15 => "HELP_REQUEST",
        DefaultText = 0x17 => "DEFAULT_TEXT",
        EventList = 0x19 => "EVENT_LIST",
        IconId = 0x1E => "ICON_ID",
        ItemIconIdList = 0x1F => "ITEM_ICON_ID_LIST",
        ImmediateResponse = 0x2B => "IMMEDIATE_RESPONSE",
        Language = 0x2D => "LANGUAGE",
        Url = 0x31 => "URL",
        BrowserTerminationCause = 0x34 => "BROWSER_TERMINATION_CAUSE",
        BearerDescription = 0x35 => "BEARER_DESCRIPTION",
        ChannelData = 0x36 => "CHANNEL_DATA",
        ChannelDataLength = 0x37 => "CHANNEL_DATA_LENGTH",
        ChannelStatus = 0x38 => "CHANNEL_STATUS",
        BufferSize = 0x39 => "BUFFER_SIZE",
        TransportLevel = 0x3C => "TRANSPORT_LEVEL",
        OtherAddress = 0x3E => "OTHER_ADDRESS",
        NetworkAccessName = 0x47 => "NETWORK_ACCESS_NAME",
        TextAttribute = 0x50 => "TEXT_ATTRIBUTE",
    }
}
