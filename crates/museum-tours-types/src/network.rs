//! Passive online/offline flag behind the offline banner

/// Browser connectivity as last reported by `online` / `offline` events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkStatus {
    #[default]
    Online,
    Offline,
}

impl NetworkStatus {
    pub const OFFLINE_BANNER: &'static str = "You are offline. Showing cached content.";

    /// From `navigator.onLine`
    pub fn from_online(online: bool) -> Self {
        if online {
            NetworkStatus::Online
        } else {
            NetworkStatus::Offline
        }
    }

    /// Next status after a window event; unrelated events leave it unchanged
    pub fn on_event(self, event_type: &str) -> Self {
        match event_type {
            "online" => NetworkStatus::Online,
            "offline" => NetworkStatus::Offline,
            _ => self,
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, NetworkStatus::Online)
    }

    /// Banner text, present only while offline
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            NetworkStatus::Online => None,
            NetworkStatus::Offline => Some(Self::OFFLINE_BANNER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_follows_connectivity() {
        let status = NetworkStatus::from_online(true);
        assert!(status.banner().is_none());

        let status = status.on_event("offline");
        assert_eq!(status.banner(), Some(NetworkStatus::OFFLINE_BANNER));

        let status = status.on_event("online");
        assert!(status.banner().is_none());
        assert!(status.is_online());
    }

    #[test]
    fn test_unrelated_event_keeps_status() {
        let status = NetworkStatus::Offline.on_event("resize");
        assert_eq!(status, NetworkStatus::Offline);
    }

    #[test]
    fn test_from_navigator_offline() {
        assert_eq!(NetworkStatus::from_online(false), NetworkStatus::Offline);
    }
}
