//! Fetch, dispatch and save flows of the room list page.
//!
//! The controller owns no rows itself. Results are pushed into a
//! [`RoomListView`], and every continuation checks the page's [`Liveness`]
//! before it touches the view.

use std::{cell::RefCell, rc::Rc};

use tracing::{debug, warn};

use crate::{
    action::{ActionKind, InflightSet, RoomAction},
    api::{NewRoomRequest, RoomApi},
    lifecycle::Liveness,
    room::{map_rooms, RoomRow},
};

const SETTINGS_SAVED: &str = "设置保存成功";
const SETTINGS_SERVER_ERROR: &str = "Server Error!";
const NO_ROOM_CREATED: &str = "服务端未创建直播间，请检查地址是否受支持";

/// Sink for everything the controller wants to show.
pub trait RoomListView {
    /// Replace the whole row set.
    fn replace_rows(&self, rows: Vec<RoomRow>);
    /// Show a blocking message.
    fn alert(&self, message: &str);
    /// The set of pending actions changed.
    fn inflight_changed(&self, _inflight: &InflightSet) {}
}

/// How a row action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Call succeeded and the list was refreshed.
    Completed,
    /// Call failed and the user was alerted.
    Failed,
    /// The same action on the same room was already pending.
    Ignored,
    /// The page unmounted before the call resolved.
    Abandoned,
}

/// Drives one mounted room list page.
pub struct RoomListController<A: ?Sized> {
    api: Rc<A>,
    liveness: Liveness,
    inflight: Rc<RefCell<InflightSet>>,
}

impl<A: ?Sized> Clone for RoomListController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            liveness: self.liveness.clone(),
            inflight: self.inflight.clone(),
        }
    }
}

impl<A: RoomApi + ?Sized> RoomListController<A> {
    /// Controller bound to `liveness`.
    pub fn new(api: Rc<A>, liveness: Liveness) -> Self {
        Self {
            api,
            liveness,
            inflight: Rc::new(RefCell::new(InflightSet::default())),
        }
    }

    /// Snapshot of pending actions.
    pub fn inflight(&self) -> InflightSet {
        self.inflight.borrow().clone()
    }

    /// Fetch the list and replace the rows. On failure the rows stay as they
    /// were and one alert is shown. Returns whether the rows were replaced.
    pub async fn refresh<V: RoomListView + ?Sized>(&self, view: &V) -> bool {
        debug!("fetching room list");
        let result = self.api.get_room_list().await;
        if !self.liveness.is_alive() {
            debug!("room list response dropped after unmount");
            return false;
        }
        match result {
            Ok(rooms) => {
                debug!(count = rooms.len(), "room list loaded");
                view.replace_rows(map_rooms(rooms));
                true
            },
            Err(err) => {
                warn!(error = %err, "room list fetch failed");
                view.alert(&format!("加载列表数据失败:\n{err}"));
                false
            },
        }
    }

    /// Run a confirmed row action: call the backend, then save settings in
    /// the background and refresh once.
    pub async fn dispatch<V: RoomListView + ?Sized>(
        &self,
        row: &RoomRow,
        kind: ActionKind,
        view: &V,
    ) -> DispatchOutcome {
        let action = RoomAction::resolve(row, kind);
        if !self.inflight.borrow_mut().try_begin(&action.room_id, kind) {
            debug!(room_id = %action.room_id, ?kind, "action already pending");
            return DispatchOutcome::Ignored;
        }
        view.inflight_changed(&self.inflight());

        debug!(room_id = %action.room_id, call = ?action.call, "dispatching room action");
        let result = self.api.invoke(action.call, &action.room_id).await;
        self.inflight.borrow_mut().finish(&action.room_id, kind);

        if result.is_ok() {
            self.api.save_settings_in_background();
        }
        if !self.liveness.is_alive() {
            return DispatchOutcome::Abandoned;
        }
        view.inflight_changed(&self.inflight());

        match result {
            Ok(()) => {
                self.refresh(view).await;
                DispatchOutcome::Completed
            },
            Err(err) => {
                warn!(room_id = %action.room_id, call = ?action.call, error = %err, "room action failed");
                view.alert(&action.failure_message(&err));
                DispatchOutcome::Failed
            },
        }
    }

    /// Persist settings and report the result.
    pub async fn save_settings<V: RoomListView + ?Sized>(&self, view: &V) -> bool {
        let result = self.api.save_settings().await;
        if !self.liveness.is_alive() {
            return false;
        }
        match result {
            Ok(response) if response.is_success() => {
                view.alert(SETTINGS_SAVED);
                true
            },
            Ok(response) => {
                warn!(err_no = response.err_no, err_msg = %response.err_msg, "settings save rejected");
                view.alert(SETTINGS_SERVER_ERROR);
                false
            },
            Err(err) => {
                warn!(error = %err, "settings save failed");
                view.alert(&format!("{SETTINGS_SERVER_ERROR}:\n{err}"));
                false
            },
        }
    }

    /// Add one room from user input. Returns whether it was added.
    ///
    /// The backend answers with the rooms it actually created and skips URLs
    /// it cannot parse, so an empty answer counts as a failure.
    pub async fn add_room<V: RoomListView + ?Sized>(&self, url: &str, listen: bool, view: &V) -> bool {
        let request = match NewRoomRequest::from_input(url, listen) {
            Ok(request) => request,
            Err(err) => {
                view.alert(&format!("添加直播间失败:\n{err}"));
                return false;
            },
        };
        debug!(url = %request.url, listen, "adding room");
        let result = self.api.add_rooms(std::slice::from_ref(&request)).await;
        let created = matches!(&result, Ok(rooms) if !rooms.is_empty());
        if created {
            self.api.save_settings_in_background();
        }
        if !self.liveness.is_alive() {
            return false;
        }
        match result {
            Ok(rooms) if rooms.is_empty() => {
                warn!(url = %request.url, "backend created no room");
                view.alert(&format!("添加直播间失败:\n{NO_ROOM_CREATED}"));
                false
            },
            Ok(rooms) => {
                debug!(count = rooms.len(), "rooms added");
                self.refresh(view).await;
                true
            },
            Err(err) => {
                warn!(url = %request.url, error = %err, "add room failed");
                view.alert(&format!("添加直播间失败:\n{err}"));
                false
            },
        }
    }
}
