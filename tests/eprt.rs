#![allow(missing_docs)]

pub mod common;

use common::{read_from_server, send_to_server, tcp_connect};

#[tokio::test(flavor = "current_thread")]
async fn eprt_with_unsupported_family_is_522() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buffer = vec![0_u8; 1024];

    assert_eq!(read_from_server(&mut buffer, &stream).await, "220 Service ready for new user.\r\n");
    send_to_server("USER test\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "331 User name okay, need password.\r\n");
    send_to_server("PASS test\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "230 User logged in, proceed.\r\n");

    send_to_server("EPRT |3|127.0.0.1|2121|\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "522 Network protocol not supported, use (1,2)\r\n");

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn eprt_malformed_parameter_is_501() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buffer = vec![0_u8; 1024];

    assert_eq!(read_from_server(&mut buffer, &stream).await, "220 Service ready for new user.\r\n");
    send_to_server("USER test\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "331 User name okay, need password.\r\n");
    send_to_server("PASS test\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "230 User logged in, proceed.\r\n");

    send_to_server("EPRT not-a-valid-param\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "501 Syntax error in parameters or arguments\r\n");

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn epsv_opens_a_passive_endpoint() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buffer = vec![0_u8; 1024];

    assert_eq!(read_from_server(&mut buffer, &stream).await, "220 Service ready for new user.\r\n");
    send_to_server("USER test\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "331 User name okay, need password.\r\n");
    send_to_server("PASS test\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "230 User logged in, proceed.\r\n");

    send_to_server("EPSV\r\n", &stream).await;
    let reply = read_from_server(&mut buffer, &stream).await;
    assert!(reply.starts_with("229 Entering Extended Passive Mode (|||"), "unexpected EPSV reply: {reply}");

    common::finalize().await;
}
