//! Tic-Tac-Toe AI CLI
//!
//! 命令行界面，用于测试 AI
//!
//! 支持两种模式：
//! 1. 单次命令模式：每次执行一个命令
//! 2. Server 模式：长驻进程，通过 stdin/stdout 通信

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tictactoe_ai::{
    choose_move, detect_pattern, heatmap, AIConfig, AIEngine, Board, Difficulty, Error, Game,
    MinimaxAI, MovePattern, Outcome, Player, RngChooser, ScoredMove,
};

#[derive(Parser)]
#[command(name = "tictactoe-ai")]
#[command(about = "Tic-Tac-Toe AI Engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 获取合法走法
    Moves {
        /// 棋盘记谱（如 XO_/_X_/__O）
        #[arg(long)]
        board: String,
    },

    /// 选择最佳走法
    Best {
        /// 棋盘记谱
        #[arg(long)]
        board: String,

        /// AI 执子方（默认按子数推断）
        #[arg(long)]
        player: Option<Player>,

        /// AI 难度 (easy, medium, hard)
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,

        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 判断局面结果
    Eval {
        /// 棋盘记谱
        #[arg(long)]
        board: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 搜索调试（每个走法的 minimax 得分，剪枝与不剪枝对照）
    Search {
        /// 棋盘记谱
        #[arg(long)]
        board: String,

        /// 搜索方（默认按子数推断）
        #[arg(long)]
        player: Option<Player>,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 分析历史走法（热力图和风格）
    Analyze {
        /// 走法位置列表，逗号分隔（如 0,4,8）
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// AI 自对弈
    Play {
        /// X 方难度
        #[arg(long, default_value = "hard")]
        x: Difficulty,

        /// O 方难度
        #[arg(long, default_value = "hard")]
        o: Difficulty,

        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,
    },

    /// 启动 server 模式（stdin/stdout 通信）
    Server,
}

#[derive(Serialize, Deserialize)]
struct BestResponse {
    #[serde(rename = "move")]
    mv: usize,
    player: Player,
    difficulty: Difficulty,
}

#[derive(Serialize)]
struct AnalyzeResponse {
    heatmap: [u32; 9],
    #[serde(flatten)]
    pattern: MovePattern,
}

// Server 模式的请求和响应结构
#[derive(Serialize, Deserialize)]
struct ServerRequest {
    cmd: String,
    #[serde(default)]
    board: String,
    #[serde(default)]
    player: Option<Player>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    position: Option<usize>,
    #[serde(default)]
    moves: Option<Vec<usize>>,
}

#[derive(Serialize, Default)]
struct ServerResponse {
    ok: bool,
    #[serde(rename = "move", skip_serializing_if = "Option::is_none")]
    mv: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    player: Option<Player>,
    #[serde(skip_serializing_if = "Option::is_none")]
    legal_moves: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    board: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<Outcome>,
    // search 命令的字段
    #[serde(skip_serializing_if = "Option::is_none")]
    scores: Option<Vec<ScoredMove>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ms: Option<f64>,
    // analyze 命令的字段
    #[serde(skip_serializing_if = "Option::is_none")]
    heatmap: Option<[u32; 9]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<MovePattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ServerResponse {
    fn success_move(mv: usize, player: Player) -> Self {
        Self {
            ok: true,
            mv: Some(mv),
            player: Some(player),
            ..Default::default()
        }
    }

    fn success_legal_moves(legal_moves: Vec<usize>) -> Self {
        Self {
            ok: true,
            legal_moves: Some(legal_moves),
            ..Default::default()
        }
    }

    fn success_board(board: &Board) -> Self {
        Self {
            ok: true,
            board: Some(board.to_notation()),
            outcome: Some(board.evaluate()),
            ..Default::default()
        }
    }

    fn success_search(scores: Vec<ScoredMove>, nodes: u64, elapsed_ms: f64) -> Self {
        Self {
            ok: true,
            scores: Some(scores),
            nodes: Some(nodes),
            elapsed_ms: Some(elapsed_ms),
            ..Default::default()
        }
    }

    fn success_analyze(moves: &[usize]) -> Self {
        Self {
            ok: true,
            heatmap: Some(heatmap(moves)),
            pattern: Some(detect_pattern(moves)),
            ..Default::default()
        }
    }

    fn error(msg: &str) -> Self {
        Self {
            ok: false,
            error: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

/// 输出错误并退出
fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(1);
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.unwrap_or_else(|e| fail(e))
}

fn parse_or_fail(notation: &str) -> Board {
    Board::from_notation(notation).unwrap_or_else(|e| fail(e))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Moves { board } => {
            let board = parse_or_fail(&board);
            let moves = board.legal_moves();
            println!("Legal moves ({}):", moves.len());
            for mv in &moves {
                println!("  {}", mv);
            }
        }

        Commands::Best {
            board,
            player,
            difficulty,
            seed,
            json,
        } => {
            let board = parse_or_fail(&board);
            if !board.evaluate().is_ongoing() {
                fail(Error::GameOver);
            }
            let player = player.unwrap_or_else(|| board.side_to_move());
            let mut ai = AIEngine::new(&AIConfig { difficulty, seed });

            let mv = ai.select_move(&board, player).unwrap_or_else(|e| fail(e));
            if json {
                let response = BestResponse {
                    mv,
                    player,
                    difficulty,
                };
                println!("{}", to_json(&response, true));
            } else {
                println!("Best move (difficulty={}, player={}): {}", difficulty, player, mv);
            }
        }

        Commands::Eval { board, json } => {
            let board = parse_or_fail(&board);
            let outcome = board.evaluate();
            if json {
                println!("{}", to_json(&outcome, true));
            } else {
                println!("{}\n", board.to_grid());
                println!("Outcome: {}", outcome);
            }
        }

        Commands::Search {
            board,
            player,
            json,
        } => {
            let board = parse_or_fail(&board);
            let player = player.unwrap_or_else(|| board.side_to_move());

            let start = Instant::now();
            let (scores, pruned) = MinimaxAI::ALPHA_BETA.score_moves(&board, player);
            let pruned_ms = start.elapsed().as_secs_f64() * 1000.0;

            let start = Instant::now();
            let (_, plain) = MinimaxAI::PLAIN.score_moves(&board, player);
            let plain_ms = start.elapsed().as_secs_f64() * 1000.0;

            if json {
                let response = ServerResponse::success_search(scores, pruned.nodes, pruned_ms);
                println!("{}", to_json(&response, true));
            } else {
                println!("Search result (player={}):", player);
                for sm in &scores {
                    println!("  {}: score={}", sm.position, sm.score);
                }
                println!(
                    "\nalpha-beta: nodes={}, time={:.3}ms",
                    pruned.nodes, pruned_ms
                );
                println!("minimax:    nodes={}, time={:.3}ms", plain.nodes, plain_ms);
            }
        }

        Commands::Analyze { moves, json } => {
            if json {
                let response = AnalyzeResponse {
                    heatmap: heatmap(&moves),
                    pattern: detect_pattern(&moves),
                };
                println!("{}", to_json(&response, true));
            } else {
                let counts = heatmap(&moves);
                let pattern = detect_pattern(&moves);
                println!("Heatmap:");
                for row in counts.chunks(3) {
                    println!("  {:>3} {:>3} {:>3}", row[0], row[1], row[2]);
                }
                println!("Preferred positions: {:?}", pattern.preferred_positions);
                println!("Tendency: {:?}", pattern.tendency);
            }
        }

        Commands::Play { x, o, seed } => {
            let mut game = Game::new();
            let mut chooser = RngChooser::new(seed);
            while game.outcome().is_ongoing() {
                let difficulty = if game.turn() == Player::X { x } else { o };
                let player = game.turn();
                let mv = game
                    .play_ai(difficulty, &mut chooser)
                    .unwrap_or_else(|e| fail(e));
                println!("{} ({}) -> {}", player, difficulty, mv);
            }
            println!("\n{}\n", game.board().to_grid());
            println!("Result: {}", game.outcome());
        }

        Commands::Server => {
            run_server();
        }
    }
}

/// Server 模式主循环
/// 从 stdin 读取 JSON 请求，返回 JSON 响应到 stdout
fn run_server() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        // 空行跳过
        if line.trim().is_empty() {
            continue;
        }

        // 解析请求
        let response = match serde_json::from_str::<ServerRequest>(&line) {
            Ok(request) if request.cmd == "quit" => break,
            Ok(request) => handle_request(&request),
            Err(e) => ServerResponse::error(&format!("Invalid JSON: {}", e)),
        };

        // 返回响应
        println!("{}", to_json(&response, false));
        let _ = stdout.flush();
    }
}

fn handle_request(request: &ServerRequest) -> ServerResponse {
    match request.cmd.as_str() {
        "best" => handle_best_request(request),
        "moves" => handle_moves_request(request),
        "eval" => handle_eval_request(request),
        "apply" => handle_apply_request(request),
        "search" => handle_search_request(request),
        "analyze" => {
            ServerResponse::success_analyze(request.moves.as_deref().unwrap_or_default())
        }
        _ => ServerResponse::error(&format!("Unknown command: {}", request.cmd)),
    }
}

/// 处理 best 命令
fn handle_best_request(request: &ServerRequest) -> ServerResponse {
    let board = match Board::from_notation(&request.board) {
        Ok(b) => b,
        Err(e) => return ServerResponse::error(&e.to_string()),
    };
    if !board.evaluate().is_ongoing() {
        return ServerResponse::error(&Error::GameOver.to_string());
    }
    let difficulty = match request
        .difficulty
        .as_deref()
        .map(str::parse::<Difficulty>)
        .transpose()
    {
        Ok(d) => d.unwrap_or_default(),
        Err(e) => return ServerResponse::error(&format!("Invalid difficulty: {}", e)),
    };
    let player = request.player.unwrap_or_else(|| board.side_to_move());
    let mut chooser = RngChooser::new(request.seed);

    match choose_move(&board, player, difficulty, &mut chooser) {
        Ok(mv) => ServerResponse::success_move(mv, player),
        Err(e) => ServerResponse::error(&format!("AI error: {}", e)),
    }
}

/// 处理 moves 命令
fn handle_moves_request(request: &ServerRequest) -> ServerResponse {
    match Board::from_notation(&request.board) {
        Ok(board) => ServerResponse::success_legal_moves(board.legal_moves()),
        Err(e) => ServerResponse::error(&e.to_string()),
    }
}

/// 处理 eval 命令
fn handle_eval_request(request: &ServerRequest) -> ServerResponse {
    match Board::from_notation(&request.board) {
        Ok(board) => ServerResponse::success_board(&board),
        Err(e) => ServerResponse::error(&e.to_string()),
    }
}

/// 处理 apply 命令（落子后返回新局面）
fn handle_apply_request(request: &ServerRequest) -> ServerResponse {
    let board = match Board::from_notation(&request.board) {
        Ok(b) => b,
        Err(e) => return ServerResponse::error(&e.to_string()),
    };
    let Some(position) = request.position else {
        return ServerResponse::error("Missing position");
    };
    let player = request.player.unwrap_or_else(|| board.side_to_move());

    // 经 Game 落子，检查对局是否结束与轮次
    let mut game = Game::from_board(board);
    match game.play(position, player) {
        Ok(_) => ServerResponse::success_board(game.board()),
        Err(e) => ServerResponse::error(&e.to_string()),
    }
}

/// 处理 search 命令（搜索调试）
fn handle_search_request(request: &ServerRequest) -> ServerResponse {
    let board = match Board::from_notation(&request.board) {
        Ok(b) => b,
        Err(e) => return ServerResponse::error(&e.to_string()),
    };
    let player = request.player.unwrap_or_else(|| board.side_to_move());

    let start = Instant::now();
    let (scores, stats) = MinimaxAI::ALPHA_BETA.score_moves(&board, player);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    ServerResponse::success_search(scores, stats.nodes, elapsed_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> ServerRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_best_rejects_finished_board() {
        for board in ["XXX/OO_/___", "XOX/XOO/OXX"] {
            let json = format!(r#"{{"cmd":"best","board":"{}","difficulty":"hard"}}"#, board);
            let response = handle_request(&request(&json));
            assert!(!response.ok, "board {}", board);
            assert!(response.mv.is_none());
            assert_eq!(response.error.as_deref(), Some("game already over"));
        }
    }

    #[test]
    fn test_best_on_ongoing_board() {
        let response =
            handle_request(&request(r#"{"cmd":"best","board":"XX_/OO_/___","difficulty":"hard"}"#));
        assert!(response.ok);
        assert_eq!(response.mv, Some(2));
        assert_eq!(response.player, Some(Player::X));
    }

    #[test]
    fn test_apply_rejects_wrong_turn() {
        let response = handle_request(&request(
            r#"{"cmd":"apply","board":"X________","position":1,"player":"X"}"#,
        ));
        assert!(!response.ok);
        assert!(response.board.is_none());
        assert_eq!(
            response.error,
            Some(Error::WrongTurn { expected: Player::O }.to_string())
        );
    }

    #[test]
    fn test_apply_rejects_finished_board() {
        let response =
            handle_request(&request(r#"{"cmd":"apply","board":"XXX/OO_/___","position":5}"#));
        assert!(!response.ok);
        assert_eq!(response.error.as_deref(), Some("game already over"));
    }

    #[test]
    fn test_apply_result_reparses() {
        let board = "XO_/_X_/___";
        for position in Board::from_notation(board).unwrap().legal_moves() {
            for player in ["X", "O"] {
                let json = format!(
                    r#"{{"cmd":"apply","board":"{}","position":{},"player":"{}"}}"#,
                    board, position, player
                );
                let response = handle_request(&request(&json));
                if let Some(next) = response.board {
                    assert!(response.ok);
                    assert!(Board::from_notation(&next).is_ok(), "{}", next);
                }
            }
        }

        let response = handle_request(&request(r#"{"cmd":"apply","board":"XO_/_X_/___","position":2}"#));
        assert!(response.ok);
        assert_eq!(response.board.as_deref(), Some("XOO/_X_/___"));
    }
}
