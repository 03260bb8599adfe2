//! Chat page orchestration over an in-process transport

use chat_app::{
    ChannelTransport, ChatAppError, ChatPage, IncomingMessage, ModalKey, SendOutcome,
    TransportError, TransportEvent,
};
use chat_core::{Message, Role};
use chat_state::{selectors, ConnectionStatus, Store, StoreAction};

fn page() -> (ChatPage<ChannelTransport>, chat_app::RemoteEnd) {
    let (transport, remote) = ChannelTransport::pair();
    (ChatPage::new(transport), remote)
}

#[tokio::test]
async fn test_create_new_chat_prepends_and_activates() {
    let (page, _remote) = page();
    let mut store = Store::new();
    store.dispatch(StoreAction::AddMessage(Message::user("old")));
    page.open_sidebar(&mut store);
    page.open_new_chat_modal(&mut store);
    page.set_new_chat_name(&mut store, "  Code Review  ");

    let id = page.create_new_chat(&mut store).expect("chat created");

    let chats = selectors::chats(&store);
    assert_eq!(chats[0].id, id);
    assert_eq!(chats[0].title, "Code Review");
    assert!(chats[0].active);
    assert_eq!(chats.iter().filter(|c| c.active).count(), 1);
    assert!(chats[1..].iter().all(|c| c.id != id));
    assert!(selectors::messages(&store).is_empty());
    assert!(!selectors::is_sidebar_open(&store));
    assert!(!selectors::show_new_chat_modal(&store));
    assert_eq!(selectors::new_chat_name(&store), "");

    let order: Vec<_> = store.history().iter().rev().take(5).map(|d| d.action).collect();
    assert_eq!(
        order,
        vec![
            "reset_new_chat_modal",
            "set_is_sidebar_open",
            "clear_messages",
            "set_active_chat",
            "add_chat",
        ]
    );
}

#[tokio::test]
async fn test_new_chat_ids_are_unique() {
    let (page, _remote) = page();
    let mut store = Store::new();

    page.set_new_chat_name(&mut store, "Same");
    let first = page.create_new_chat(&mut store).unwrap();
    page.set_new_chat_name(&mut store, "Same");
    let second = page.create_new_chat(&mut store).unwrap();

    assert_ne!(first, second);
    assert_eq!(selectors::chats(&store).len(), 7);
}

#[tokio::test]
async fn test_blank_draft_creates_nothing() {
    let (page, _remote) = page();
    let mut store = Store::new();
    page.open_new_chat_modal(&mut store);
    page.set_new_chat_name(&mut store, "   ");

    assert!(page.handle_modal_key(&mut store, ModalKey::Enter).is_none());
    assert_eq!(selectors::chats(&store).len(), 5);
    assert!(selectors::show_new_chat_modal(&store));

    assert!(page.handle_modal_key(&mut store, ModalKey::Other).is_none());
    assert!(selectors::show_new_chat_modal(&store));

    page.handle_modal_key(&mut store, ModalKey::Escape);
    assert!(!selectors::show_new_chat_modal(&store));
}

#[tokio::test]
async fn test_send_message_emits_prompt() {
    let (page, mut remote) = page();
    let mut store = Store::new();
    store.dispatch(StoreAction::SetActiveChat("2".into()));

    let outcome = page.send_message(&mut store, "  hello there ").await.unwrap();

    let SendOutcome::Sent(message) = outcome else {
        panic!("message was not sent");
    };
    assert_eq!(message.role, Role::User);
    assert_eq!(message.content, "hello there");
    assert_eq!(selectors::messages(&store), &[message]);
    assert!(!selectors::is_sending(&store));

    let prompt = remote.recv_prompt().await.unwrap();
    assert_eq!(prompt.chat_id, "2");
    assert_eq!(prompt.prompt, "hello there");
}

#[tokio::test]
async fn test_send_guards() {
    let (page, mut remote) = page();
    let mut store = Store::new();

    assert_eq!(
        page.send_message(&mut store, "   ").await.unwrap(),
        SendOutcome::Ignored
    );

    store.dispatch(StoreAction::SetIsSending(true));
    assert_eq!(
        page.send_message(&mut store, "queued?").await.unwrap(),
        SendOutcome::Ignored
    );

    assert!(selectors::messages(&store).is_empty());
    assert!(remote.try_recv_prompt().is_none());
}

#[tokio::test]
async fn test_send_failure_clears_sending_flag() {
    let (page, remote) = page();
    drop(remote);
    let mut store = Store::new();

    let err = page.send_message(&mut store, "lost").await.unwrap_err();

    assert!(matches!(err, ChatAppError::Transport(TransportError::Closed)));
    assert!(!selectors::is_sending(&store));
    assert_eq!(selectors::messages(&store).len(), 1);
}

#[tokio::test]
async fn test_select_chat_loads_history() {
    let (transport, _remote) = ChannelTransport::pair();
    let history = vec![
        Message::new("h1", Role::User, "earlier"),
        Message::new("h2", Role::Model, "reply"),
    ];
    let page = ChatPage::new(transport.with_history("4", history.clone()));
    let mut store = Store::new();
    store.dispatch(StoreAction::AddMessage(Message::user("from chat 1")));
    page.open_sidebar(&mut store);

    page.select_chat(&mut store, "4").await;
    assert_eq!(selectors::active_chat_id(&store), Some("4"));
    assert_eq!(selectors::active_chat_title(&store), "Modern Hero Slider");
    assert!(!selectors::is_sidebar_open(&store));
    assert_eq!(selectors::messages(&store), history.as_slice());

    page.select_chat(&mut store, "5").await;
    assert!(selectors::messages(&store).is_empty());
}

#[tokio::test]
async fn test_transport_events_drive_store() {
    let (mut page, remote) = page();
    let mut store = Store::new();

    remote.connect().await.unwrap();
    remote
        .reply(IncomingMessage {
            id: Some("srv-9".into()),
            role: None,
            content: Some("hi!".into()),
        })
        .await
        .unwrap();
    remote.send(TransportEvent::Response(IncomingMessage::default())).await.unwrap();
    remote.disconnect().await.unwrap();

    assert!(page.pump(&mut store).await);
    assert_eq!(selectors::connection_status(&store), ConnectionStatus::Connected);

    assert!(page.pump(&mut store).await);
    assert!(page.pump(&mut store).await);
    let messages = selectors::messages(&store);
    assert_eq!(messages[0], Message::new("srv-9", Role::Model, "hi!"));
    assert_eq!(messages[1].role, Role::Model);
    assert_eq!(messages[1].content, "");

    assert!(page.pump(&mut store).await);
    assert!(!selectors::is_connected(&store));

    store.dispatch(StoreAction::MarkConnected);
    drop(remote);
    assert!(!page.pump(&mut store).await);
    assert_eq!(selectors::connection_status(&store), ConnectionStatus::Disconnected);
}

#[tokio::test]
async fn test_toggle_sidebar_twice() {
    let (page, _remote) = page();
    let mut store = Store::new();
    let start = selectors::is_sidebar_open(&store);
    page.toggle_sidebar(&mut store);
    page.toggle_sidebar(&mut store);
    assert_eq!(selectors::is_sidebar_open(&store), start);
}
