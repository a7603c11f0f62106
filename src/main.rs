use anyhow::Context;
use snapline::options::USAGE;
use snapline::{error, logging, App, EditorOptions};

fn main() -> anyhow::Result<()> {
    error::setup_panic_handler();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = EditorOptions::from_env(&args).context("コマンドライン引数の解析に失敗しました")?;

    if options.show_help {
        print!("{}", USAGE);
        return Ok(());
    }
    if options.show_version {
        println!("snapline {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(options.log_path()).context("ロガーの初期化に失敗しました")?;

    let mut app = App::new(&options).context("ファイルの読み込みに失敗しました")?;
    let result = app.run().context("エディタの実行中にエラーが発生しました");
    log::logger().flush();
    result
}
