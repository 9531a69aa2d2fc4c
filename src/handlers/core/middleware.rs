//! Reply middleware for routing handler output.
//!
//! Direct forwards each reply to the host's outgoing channel. Capturing buffers
//! replies in memory, for hosts that batch output and for tests.

use tokio::sync::{Mutex, mpsc};

/// Where a handler's reply goes.
#[derive(Clone, Copy)]
pub enum ReplySink<'a> {
    Direct(&'a mpsc::Sender<String>),
    Capturing(&'a Mutex<Vec<String>>),
}

impl<'a> ReplySink<'a> {
    /// Send or buffer a reply depending on sink mode.
    pub async fn send(&self, text: String) -> Result<(), mpsc::error::SendError<String>> {
        match self {
            Self::Direct(tx) => tx.send(text).await,
            Self::Capturing(buf) => {
                buf.lock().await.push(text);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn capturing_sink_buffers_in_order() {
        let buf = Mutex::new(Vec::new());
        let sink = ReplySink::Capturing(&buf);
        sink.send("one".into()).await.unwrap();
        sink.send("two".into()).await.unwrap();
        assert_eq!(*buf.lock().await, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn direct_sink_forwards_to_channel() {
        let (tx, mut rx) = mpsc::channel(4);
        ReplySink::Direct(&tx).send("hello".into()).await.unwrap();
        assert_eq!(rx.recv().await.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn direct_sink_fails_when_receiver_is_gone() {
        let (tx, rx) = mpsc::channel::<String>(1);
        drop(rx);
        let err = ReplySink::Direct(&tx).send("lost".into()).await.unwrap_err();
        assert_eq!(err.0, "lost");
    }
}
