//! 交互式终端
//!
//! 命令逐行读取；`add` 之后弹出提示并阻塞，直到用户按下回车。

use std::io::{self, BufRead, Write};

use super::{session::Storefront, view};

const HELP: &str = "commands: add <id> | search <text> | cart | help | quit";

#[derive(Debug, PartialEq)]
enum Command {
    Add(u32),
    Search(String),
    Cart,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match verb {
        "add" => rest
            .parse()
            .map(Command::Add)
            .unwrap_or_else(|_| Command::Unknown(line.to_string())),
        "search" => Command::Search(rest.to_string()),
        "cart" => Command::Cart,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 运行直到 `quit` 或输入结束
    pub fn run(&mut self, storefront: &mut Storefront) -> io::Result<()> {
        writeln!(self.output, "{}", storefront.render())?;
        writeln!(self.output, "{HELP}")?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Command::Add(id) => {
                    let Some(product) = storefront.find_product(id).cloned() else {
                        writeln!(self.output, "no product with id {id}")?;
                        continue;
                    };
                    let notification = storefront.add_to_cart(&product);
                    self.alert(&notification.message)?;
                    writeln!(self.output, "{}", view::render_header(storefront.cart().len()))?;
                }
                Command::Search(query) => storefront.search(&query),
                Command::Cart => {
                    writeln!(self.output, "Cart ({})", storefront.cart().len())?;
                    for (index, entry) in storefront.cart().entries().iter().enumerate() {
                        writeln!(self.output, "  {}. {}", index + 1, entry.name)?;
                    }
                }
                Command::Help => writeln!(self.output, "{HELP}")?,
                Command::Quit => break,
                Command::Unknown(text) => writeln!(self.output, "unknown command: {text}\n{HELP}")?,
            }
        }

        Ok(())
    }

    /// 阻塞式提示，输入结束也视为确认
    fn alert(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "\n  [!] {message}")?;
        write!(self.output, "  press Enter to continue")?;
        self.output.flush()?;
        self.read_line()?;
        writeln!(self.output)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}
