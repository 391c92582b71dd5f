use crate::api::AuthStatus;

const DEFAULT_HOME_URL: &str = "/";

#[derive(Clone, Default)]
pub struct GlobalState {
    pub auth: Option<AuthStatus>,
    pub runtime: Option<RunTime>,
}

impl GlobalState {
    pub fn is_authenticated(&self) -> bool {
        match &self.auth {
            // a backend without a configured password reports
            // auth_required = false and accepts everyone
            Some(status) => status.authenticated || !status.auth_required,
            None => false,
        }
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        match self.auth.as_mut() {
            Some(status) => status.authenticated = authenticated,
            None => {
                self.auth = Some(AuthStatus {
                    authenticated,
                    auth_required: true,
                });
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct RunTime {
    previous_url: String,
}

impl Default for RunTime {
    fn default() -> Self {
        Self::new()
    }
}

impl RunTime {
    pub fn new() -> Self {
        Self {
            previous_url: DEFAULT_HOME_URL.to_string(),
        }
    }

    pub fn previous_url(&self) -> &String {
        &self.previous_url
    }

    pub fn set_previous_url(&mut self, url: String) {
        self.previous_url = url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_status_is_not_authenticated() {
        let state = GlobalState::default();
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_authenticated_status() {
        let state = GlobalState {
            auth: Some(AuthStatus {
                authenticated: true,
                auth_required: true,
            }),
            runtime: None,
        };
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_auth_not_required_counts_as_authenticated() {
        let state = GlobalState {
            auth: Some(AuthStatus {
                authenticated: false,
                auth_required: false,
            }),
            runtime: None,
        };
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_set_authenticated_without_prior_status() {
        let mut state = GlobalState::default();
        state.set_authenticated(true);
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_runtime_defaults_to_home_url() {
        let runtime = RunTime::new();
        assert_eq!(runtime.previous_url(), DEFAULT_HOME_URL);
    }
}
