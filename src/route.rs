//! Hash Routing
//!
//! `#/servers` lists servers, `#/servers/{uuid}` opens one.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ServerList,
    Server(String),
}

impl Route {
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let mut parts = path.split('/').filter(|p| !p.is_empty());
        match (parts.next(), parts.next(), parts.next()) {
            (Some("servers"), Some(uuid), None) => Route::Server(uuid.to_string()),
            _ => Route::ServerList,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::ServerList => "#/servers".to_string(),
            Route::Server(uuid) => format!("#/servers/{}", uuid),
        }
    }
}

/// Route for the page's current location hash
pub fn current() -> Route {
    let hash = leptos::prelude::window().location().hash().unwrap_or_default();
    Route::parse(&hash)
}

/// Change the location hash; the app's `hashchange` listener re-renders.
pub fn navigate(route: &Route) {
    if let Err(e) = leptos::prelude::window().location().set_hash(&route.to_hash()) {
        log::error!("[ROUTE] failed to navigate to {:?}: {:?}", route, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("#/servers"), Route::ServerList);
        assert_eq!(Route::parse(""), Route::ServerList);
        assert_eq!(Route::parse("#/servers/564d-aa/"), Route::Server("564d-aa".to_string()));
        assert_eq!(Route::parse("#/vms/123"), Route::ServerList);
        assert_eq!(Route::parse("#/servers/1/nics"), Route::ServerList);
    }

    #[test]
    fn test_hash_round_trip() {
        let route = Route::Server("abc".to_string());
        assert_eq!(Route::parse(&route.to_hash()), route);
    }
}
