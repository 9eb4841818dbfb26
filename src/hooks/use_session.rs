use yew::prelude::*;

use crate::session::SessionHandle;

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionProvider is not mounted")
}
