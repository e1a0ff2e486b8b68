//! Room binding handshake.
//!
//! The messaging endpoint is room-agnostic: the first frame on a connection
//! tells the server which room the connection belongs to. That frame is a
//! chat envelope with empty `content` and must be sent exactly once,
//! immediately after the transport opens.

use crate::{
    domain::{Connection, FrameCodec, Room, RoomMessage, Username},
    error::TransportError,
};

/// Build the presence announcement for `room`.
pub fn presence_frame(room: &Room, username: &Username) -> RoomMessage {
    RoomMessage::outbound(room, username, "")
}

/// Send the presence announcement on a freshly opened connection.
pub async fn announce(
    connection: &mut dyn Connection,
    codec: &dyn FrameCodec,
    room: &Room,
    username: &Username,
) -> Result<(), TransportError> {
    let frame = codec.encode(&presence_frame(room, username))?;
    connection.send(frame).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::ConnectionId, infrastructure::codec::JsonFrameCodec, testing::FakeTransport,
    };

    #[test]
    fn test_presence_frame_has_empty_content_and_identity() {
        // テスト項目: 入室通知は content が空で、4 つの識別フィールドが設定される
        // given (前提条件):
        let room = Room::new("1", "GO", "Bob");
        let username = Username::resolve(Some("Alice"));

        // when (操作):
        let frame = presence_frame(&room, &username);

        // then (期待する結果):
        assert!(frame.is_presence());
        assert_eq!(frame.room_id, "1");
        assert_eq!(frame.room_name, "GO");
        assert_eq!(frame.owner_name, "Bob");
        assert_eq!(frame.username, "Alice");
    }

    #[tokio::test]
    async fn test_announce_sends_single_json_frame() {
        // テスト項目: announce は JSON の入室通知を 1 回だけ送信する
        // given (前提条件):
        let transport = FakeTransport::new();
        let mut connection = transport.connection(ConnectionId::new(1));
        let room = Room::new("1", "GO", "Bob");
        let username = Username::resolve(Some("Alice"));

        // when (操作):
        let result = announce(connection.as_mut(), &JsonFrameCodec, &room, &username).await;

        // then (期待する結果):
        assert!(result.is_ok());
        let sent = transport.sent_frames(ConnectionId::new(1));
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].content, "");
        assert_eq!(sent[0].username, "Alice");
    }
}
