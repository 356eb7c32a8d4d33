//! Render-time authorization for protected views.

use crate::store::Store;

/// Anything that renders output from its inputs.
///
/// The gate places no other requirement on wrapped views.
pub trait View {
    type Props;
    type Output;

    fn render(&self, props: &Self::Props) -> Self::Output;
}

/// Result of rendering through an [`AuthGate`], interpreted by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome<T> {
    /// The session is authenticated; this is the wrapped view's output.
    Render(T),
    /// The session is not authenticated; the router should navigate here.
    Redirect { to: String },
}

impl<T> GateOutcome<T> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }

    pub fn rendered(self) -> Option<T> {
        match self {
            Self::Render(output) => Some(output),
            Self::Redirect { .. } => None,
        }
    }
}

/// Wrapper that renders its view only for authenticated sessions.
///
/// The decision is taken on every render from the store's current `auth`
/// slice. Nothing is cached, so a logout gates the very next render.
pub struct AuthGate<V> {
    view: V,
    login_path: String,
}

/// Protect `view`, redirecting unauthenticated renders to `login_path`.
pub fn with_auth<V: View>(view: V, login_path: impl Into<String>) -> AuthGate<V> {
    AuthGate {
        view,
        login_path: login_path.into(),
    }
}

impl<V: View> AuthGate<V> {
    pub fn render(&self, store: &Store, props: &V::Props) -> GateOutcome<V::Output> {
        if store.get_state().auth.is_authenticated {
            return GateOutcome::Render(self.view.render(props));
        }

        tracing::debug!(to = %self.login_path, "Unauthenticated render, redirecting");
        GateOutcome::Redirect {
            to: self.login_path.clone(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }
}
