#![allow(missing_docs)]

pub mod common;

use common::{parse_pasv, read_from_server, send_to_server, tcp_connect, tcp_pasv_connect};
use tokio::io::AsyncWriteExt;

#[tokio::test(flavor = "current_thread")]
async fn rnfr_rnto_renames_a_stored_file() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buffer = vec![0_u8; 1024];

    assert_eq!(read_from_server(&mut buffer, &stream).await, "220 Service ready for new user.\r\n");
    send_to_server("USER test\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "331 User name okay, need password.\r\n");
    send_to_server("PASS test\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "230 User logged in, proceed.\r\n");

    let from = std::env::temp_dir().join(format!("unftpd-rename-from-{}.txt", std::process::id()));
    let to = std::env::temp_dir().join(format!("unftpd-rename-to-{}.txt", std::process::id()));

    send_to_server("PASV\r\n", &stream).await;
    let resp = read_from_server(&mut buffer, &stream).await;
    let addr = parse_pasv(resp).unwrap();

    send_to_server(&format!("STOR {}\r\n", from.to_str().unwrap()), &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "150 Opening data connection for file transfer\r\n");
    let mut data_stream = tcp_pasv_connect(addr).await.unwrap();
    data_stream.write_all(b"content").await.unwrap();
    data_stream.shutdown().await.unwrap();
    drop(data_stream);
    assert_eq!(read_from_server(&mut buffer, &stream).await, "226 Transfer complete\r\n");

    send_to_server(&format!("RNFR {}\r\n", from.to_str().unwrap()), &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "350 Ready for RNTO\r\n");

    send_to_server(&format!("RNTO {}\r\n", to.to_str().unwrap()), &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "250 Rename successful\r\n");

    send_to_server(&format!("DELE {}\r\n", to.to_str().unwrap()), &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "250 File successfully removed\r\n");

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn rnto_without_rnfr_is_550() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buffer = vec![0_u8; 1024];

    assert_eq!(read_from_server(&mut buffer, &stream).await, "220 Service ready for new user.\r\n");
    send_to_server("USER test\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "331 User name okay, need password.\r\n");
    send_to_server("PASS test\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "230 User logged in, proceed.\r\n");

    send_to_server("RNTO somewhere\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buffer, &stream).await, "550 RNFR required first\r\n");

    common::finalize().await;
}
