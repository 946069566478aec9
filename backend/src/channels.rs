use crate::models::Channel;

/// Channels checked on every run, in display order.
pub static CHANNELS: &[Channel] = &[
    Channel {
        id: "UC7fQFl37yAOaPaoxQm-TqSA",
        display_name: "Money Pechu",
        accent_color: Some("#f59e0b"),
    },
    Channel {
        id: "UCXqiLiKmv4lzX2HdNR4K1-g",
        display_name: "VJ Dhana",
        accent_color: Some("#10b981"),
    },
    Channel {
        id: "UC6e4O4lxpBaLYPbot2KEZGQ",
        display_name: "Arjun Pangu Market",
        accent_color: Some("#8b5cf6"),
    },
    Channel {
        id: "UCo5CAieenL0ExXzvjzs17QQ",
        display_name: "Rupee Driver",
        accent_color: Some("#ef4444"),
    },
    Channel {
        id: "UCsv9uKTMVLSDlkZrdzqYWgQ",
        display_name: "Tamil Selvan",
        accent_color: Some("#3b82f6"),
    },
];
