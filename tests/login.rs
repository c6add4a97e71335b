#![allow(missing_docs)]

pub mod common;

use common::{read_from_server, send_to_server, tcp_connect};

#[tokio::test(flavor = "current_thread")]
async fn greets_then_accepts_valid_credentials() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buffer = vec![0_u8; 1024];

    assert_eq!(read_from_server(&mut buffer, &stream).await, "220 Service ready for new user.\r\n");

    send_to_server("USER test\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "331 User name okay, need password.\r\n");

    send_to_server("PASS test\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "230 User logged in, proceed.\r\n");

    send_to_server("PWD\r\n", &stream).await;
    let reply = read_from_server(&mut buffer, &stream).await;
    assert!(reply.starts_with("257 \""), "unexpected PWD reply: {reply}");

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn rejects_wrong_password() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buffer = vec![0_u8; 1024];

    assert_eq!(read_from_server(&mut buffer, &stream).await, "220 Service ready for new user.\r\n");

    send_to_server("USER test\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "331 User name okay, need password.\r\n");

    send_to_server("PASS wrong\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "530 Not logged in\r\n");

    // A failed PASS leaves `requester` set, so retrying against the same USER works.
    send_to_server("PASS test\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "230 User logged in, proceed.\r\n");

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn gated_command_before_login_is_rejected() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buffer = vec![0_u8; 1024];

    assert_eq!(read_from_server(&mut buffer, &stream).await, "220 Service ready for new user.\r\n");

    send_to_server("LIST /\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "530 Not permission to this command.\r\n");

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_verb_is_500() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buffer = vec![0_u8; 1024];

    assert_eq!(read_from_server(&mut buffer, &stream).await, "220 Service ready for new user.\r\n");

    send_to_server("BOGUS\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "500 Unknown command\r\n");

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn auth_is_never_supported() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buffer = vec![0_u8; 1024];

    assert_eq!(read_from_server(&mut buffer, &stream).await, "220 Service ready for new user.\r\n");

    send_to_server("AUTH TLS\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "504 Command not implemented\r\n");

    common::finalize().await;
}
