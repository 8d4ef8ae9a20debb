//! Room list controller flows against a scripted backend.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use async_trait::async_trait;
use futures::channel::oneshot;
use live_console_shared::{
    ActionKind, ApiError, DispatchOutcome, InflightSet, Liveness, NewRoomRequest, RoomApi,
    RoomInfo, RoomListController, RoomListView, RoomRow, SettingsResponse, StatusTag,
};

struct FakeApi {
    rooms: RefCell<Result<Vec<RoomInfo>, ApiError>>,
    action_result: RefCell<Result<(), ApiError>>,
    settings: RefCell<Result<SettingsResponse, ApiError>>,
    list_gate: RefCell<Option<oneshot::Receiver<()>>>,
    action_gate: RefCell<Option<oneshot::Receiver<()>>>,
    calls: RefCell<Vec<String>>,
    list_fetches: Cell<usize>,
    background_saves: Cell<usize>,
    added: RefCell<Vec<NewRoomRequest>>,
    creates_rooms: Cell<bool>,
}

impl FakeApi {
    fn new(rooms: Vec<RoomInfo>) -> Self {
        Self {
            rooms: RefCell::new(Ok(rooms)),
            action_result: RefCell::new(Ok(())),
            settings: RefCell::new(Ok(SettingsResponse::default())),
            list_gate: RefCell::new(None),
            action_gate: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
            list_fetches: Cell::new(0),
            background_saves: Cell::new(0),
            added: RefCell::new(Vec::new()),
            creates_rooms: Cell::new(true),
        }
    }

    async fn action(&self, name: &str, room_id: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("{name}:{room_id}"));
        let gate = self.action_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.action_result.borrow().clone()
    }
}

#[async_trait(?Send)]
impl RoomApi for FakeApi {
    async fn get_room_list(&self) -> Result<Vec<RoomInfo>, ApiError> {
        self.list_fetches.set(self.list_fetches.get() + 1);
        let gate = self.list_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.rooms.borrow().clone()
    }

    async fn start_record(&self, room_id: &str) -> Result<(), ApiError> {
        self.action("start_record", room_id).await
    }

    async fn stop_record(&self, room_id: &str) -> Result<(), ApiError> {
        self.action("stop_record", room_id).await
    }

    async fn start_push(&self, room_id: &str) -> Result<(), ApiError> {
        self.action("start_push", room_id).await
    }

    async fn stop_push(&self, room_id: &str) -> Result<(), ApiError> {
        self.action("stop_push", room_id).await
    }

    async fn delete_room(&self, room_id: &str) -> Result<(), ApiError> {
        self.action("delete_room", room_id).await
    }

    async fn add_rooms(&self, rooms: &[NewRoomRequest]) -> Result<Vec<RoomInfo>, ApiError> {
        self.added.borrow_mut().extend_from_slice(rooms);
        let created = if self.creates_rooms.get() {
            rooms
                .iter()
                .map(|request| RoomInfo {
                    id: request.url.clone(),
                    live_url: request.url.clone(),
                    listen: request.listen,
                    ..RoomInfo::default()
                })
                .collect()
        } else {
            Vec::new()
        };
        self.action_result.borrow().clone().map(|()| created)
    }

    async fn save_settings(&self) -> Result<SettingsResponse, ApiError> {
        self.settings.borrow().clone()
    }

    fn save_settings_in_background(&self) {
        self.background_saves.set(self.background_saves.get() + 1);
    }
}

#[derive(Default)]
struct RecordingView {
    rows: RefCell<Vec<RoomRow>>,
    replacements: Cell<usize>,
    alerts: RefCell<Vec<String>>,
    inflight_updates: RefCell<Vec<InflightSet>>,
}

impl RoomListView for RecordingView {
    fn replace_rows(&self, rows: Vec<RoomRow>) {
        self.replacements.set(self.replacements.get() + 1);
        *self.rows.borrow_mut() = rows;
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn inflight_changed(&self, inflight: &InflightSet) {
        self.inflight_updates.borrow_mut().push(inflight.clone());
    }
}

fn room(id: &str, record: bool) -> RoomInfo {
    RoomInfo {
        id: id.to_string(),
        host_name: format!("host-{id}"),
        room_name: format!("room-{id}"),
        live_url: format!("https://live.example.com/{id}"),
        platform_cn_name: "斗鱼".to_string(),
        record,
        ..RoomInfo::default()
    }
}

fn controller(api: &Rc<FakeApi>) -> RoomListController<FakeApi> {
    RoomListController::new(api.clone(), Liveness::new())
}

#[tokio::test]
async fn refresh_maps_backend_records_into_rows() {
    let api = Rc::new(FakeApi::new(vec![room("1", true)]));
    let view = RecordingView::default();

    assert!(controller(&api).refresh(&view).await);

    let rows = view.rows.borrow();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record_tags, vec![StatusTag::Monitoring]);
    assert_eq!(rows[0].push_tags, vec![StatusTag::Stopped]);
    assert!(view.alerts.borrow().is_empty());
}

#[tokio::test]
async fn repeated_empty_fetches_keep_an_empty_table() {
    let api = Rc::new(FakeApi::new(Vec::new()));
    let view = RecordingView::default();
    let controller = controller(&api);

    assert!(controller.refresh(&view).await);
    assert!(controller.refresh(&view).await);

    assert!(view.rows.borrow().is_empty());
    assert_eq!(view.replacements.get(), 2);
}

#[tokio::test]
async fn rejected_fetch_keeps_rows_and_alerts_once() {
    let api = Rc::new(FakeApi::new(vec![room("1", false), room("2", true)]));
    let view = RecordingView::default();
    let controller = controller(&api);
    controller.refresh(&view).await;
    let before = view.rows.borrow().clone();

    *api.rooms.borrow_mut() = Err(ApiError::Network("connection refused".to_string()));
    assert!(!controller.refresh(&view).await);

    assert_eq!(*view.rows.borrow(), before);
    let alerts = view.alerts.borrow();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("加载列表数据失败:\n"));
    assert!(alerts[0].contains("connection refused"));
}

#[tokio::test]
async fn toggling_idle_record_starts_it_and_refreshes_once() {
    let api = Rc::new(FakeApi::new(vec![room("7", false)]));
    let view = RecordingView::default();
    let controller = controller(&api);
    controller.refresh(&view).await;
    let row = view.rows.borrow()[0].clone();
    let fetches_before = api.list_fetches.get();

    let outcome = controller.dispatch(&row, ActionKind::ToggleRecord, &view).await;

    assert_eq!(outcome, DispatchOutcome::Completed);
    assert_eq!(*api.calls.borrow(), vec!["start_record:7".to_string()]);
    assert_eq!(api.list_fetches.get(), fetches_before + 1);
    assert_eq!(api.background_saves.get(), 1);
    assert!(controller.inflight().is_empty());
}

#[tokio::test]
async fn toggling_requested_push_stops_it() {
    let api = Rc::new(FakeApi::new(vec![RoomInfo {
        push: true,
        ..room("3", false)
    }]));
    let view = RecordingView::default();
    let controller = controller(&api);
    controller.refresh(&view).await;
    let row = view.rows.borrow()[0].clone();

    controller.dispatch(&row, ActionKind::TogglePush, &view).await;

    assert_eq!(*api.calls.borrow(), vec!["stop_push:3".to_string()]);
}

#[tokio::test]
async fn failed_action_alerts_without_refresh_or_save() {
    let api = Rc::new(FakeApi::new(vec![room("9", true)]));
    let view = RecordingView::default();
    let controller = controller(&api);
    controller.refresh(&view).await;
    let row = view.rows.borrow()[0].clone();
    let fetches_before = api.list_fetches.get();
    *api.action_result.borrow_mut() = Err(ApiError::Http(500));

    let outcome = controller.dispatch(&row, ActionKind::ToggleRecord, &view).await;

    assert_eq!(outcome, DispatchOutcome::Failed);
    assert_eq!(api.list_fetches.get(), fetches_before);
    assert_eq!(api.background_saves.get(), 0);
    assert_eq!(*view.alerts.borrow(), vec!["关闭录制失败:\nHTTP error: 500".to_string()]);
}

#[tokio::test]
async fn duplicate_trigger_while_pending_is_ignored() {
    let api = Rc::new(FakeApi::new(vec![room("5", false)]));
    let view = RecordingView::default();
    let controller = controller(&api);
    controller.refresh(&view).await;
    let row = view.rows.borrow()[0].clone();
    let (release, gate) = oneshot::channel();
    *api.action_gate.borrow_mut() = Some(gate);

    let (first, second) = futures::join!(
        controller.dispatch(&row, ActionKind::Delete, &view),
        async {
            let outcome = controller.dispatch(&row, ActionKind::Delete, &view).await;
            let _ = release.send(());
            outcome
        }
    );

    assert_eq!(first, DispatchOutcome::Completed);
    assert_eq!(second, DispatchOutcome::Ignored);
    assert_eq!(*api.calls.borrow(), vec!["delete_room:5".to_string()]);
    let updates = view.inflight_updates.borrow();
    assert!(updates[0].contains("5", ActionKind::Delete));
    assert!(updates.last().is_some_and(InflightSet::is_empty));
}

#[tokio::test]
async fn unmount_before_fetch_resolves_drops_the_response() {
    let api = Rc::new(FakeApi::new(vec![room("1", true)]));
    let view = RecordingView::default();
    let liveness = Liveness::new();
    let controller = RoomListController::new(api.clone(), liveness.clone());
    let (release, gate) = oneshot::channel();
    *api.list_gate.borrow_mut() = Some(gate);

    let (replaced, ()) = futures::join!(controller.refresh(&view), async {
        liveness.shutdown();
        let _ = release.send(());
    });

    assert!(!replaced);
    assert_eq!(view.replacements.get(), 0);
    assert!(view.alerts.borrow().is_empty());
}

#[tokio::test]
async fn unmount_during_action_skips_refresh_and_alerts() {
    let api = Rc::new(FakeApi::new(vec![room("2", false)]));
    let view = RecordingView::default();
    let liveness = Liveness::new();
    let controller = RoomListController::new(api.clone(), liveness.clone());
    controller.refresh(&view).await;
    let row = view.rows.borrow()[0].clone();
    let fetches_before = api.list_fetches.get();
    let (release, gate) = oneshot::channel();
    *api.action_gate.borrow_mut() = Some(gate);

    let (outcome, ()) = futures::join!(
        controller.dispatch(&row, ActionKind::ToggleRecord, &view),
        async {
            liveness.shutdown();
            let _ = release.send(());
        }
    );

    assert_eq!(outcome, DispatchOutcome::Abandoned);
    assert_eq!(api.list_fetches.get(), fetches_before);
    assert_eq!(api.background_saves.get(), 1);
}

#[tokio::test]
async fn settings_save_reports_generic_messages() {
    let api = Rc::new(FakeApi::new(Vec::new()));
    let view = RecordingView::default();
    let controller = controller(&api);

    assert!(controller.save_settings(&view).await);

    *api.settings.borrow_mut() = Ok(SettingsResponse {
        err_no: 400,
        err_msg: "disk full".to_string(),
        ..SettingsResponse::default()
    });
    assert!(!controller.save_settings(&view).await);

    *api.settings.borrow_mut() = Err(ApiError::Http(503));
    assert!(!controller.save_settings(&view).await);

    assert_eq!(
        *view.alerts.borrow(),
        vec![
            "设置保存成功".to_string(),
            "Server Error!".to_string(),
            "Server Error!:\nHTTP error: 503".to_string(),
        ]
    );
}

#[tokio::test]
async fn adding_a_room_normalizes_input_and_refreshes() {
    let api = Rc::new(FakeApi::new(Vec::new()));
    let view = RecordingView::default();
    let controller = controller(&api);

    assert!(controller.add_room(" live.douyu.com/1 ", true, &view).await);
    assert!(!controller.add_room("   ", true, &view).await);

    let added = api.added.borrow();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].url, "https://live.douyu.com/1");
    assert_eq!(api.list_fetches.get(), 1);
    assert_eq!(api.background_saves.get(), 1);
    assert_eq!(view.alerts.borrow().len(), 1);
}

#[tokio::test]
async fn unsupported_url_answered_with_no_rooms_is_reported() {
    let api = Rc::new(FakeApi::new(Vec::new()));
    api.creates_rooms.set(false);
    let view = RecordingView::default();
    let controller = controller(&api);

    assert!(!controller.add_room("https://example.com/not-a-live", false, &view).await);

    assert_eq!(api.added.borrow().len(), 1);
    assert_eq!(api.list_fetches.get(), 0);
    assert_eq!(api.background_saves.get(), 0);
    let alerts = view.alerts.borrow();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("添加直播间失败:\n"));
}

#[tokio::test]
async fn rejected_add_request_alerts_with_backend_error() {
    let api = Rc::new(FakeApi::new(Vec::new()));
    *api.action_result.borrow_mut() = Err(ApiError::Http(500));
    let view = RecordingView::default();
    let controller = controller(&api);

    assert!(!controller.add_room("live.douyu.com/2", true, &view).await);

    assert_eq!(api.list_fetches.get(), 0);
    assert_eq!(*view.alerts.borrow(), vec!["添加直播间失败:\nHTTP error: 500".to_string()]);
}
