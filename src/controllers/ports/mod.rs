pub mod stream_presenter;
