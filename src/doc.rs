use crate::op::OpCode;
use strum::IntoEnumIterator;

pub struct OpDoc {
    pub flag: &'static str,
    pub args: &'static str,
    pub short: &'static str,
}

impl OpCode {
    pub fn doc(&self) -> OpDoc {
        match self {
            OpCode::List => OpDoc {
                flag: "--list",
                args: " dir",
                short: "Start a program over every visible file under dir.",
            },
            OpCode::Read => OpDoc {
                flag: "--read",
                args: "",
                short: "Load file contents into memory.",
            },
            OpCode::Write => OpDoc {
                flag: "--write",
                args: " dest",
                short: "Write every file under dest, creating directories as needed.",
            },
            OpCode::Rename => OpDoc {
                flag: "--rename",
                args: " old new",
                short: "Move the file at path old to path new.",
            },
            OpCode::RenameExtension => OpDoc {
                flag: "--rename-extension",
                args: " old new",
                short: "Change the extension of every file ending in old.",
            },
            OpCode::Permalink => OpDoc {
                flag: "--permalink",
                args: " name",
                short: "Turn a/b.html into a/b/name.html, leaving files already named name alone.",
            },
            OpCode::Enclose => OpDoc {
                flag: "--enclose",
                args: " dir",
                short: "Move every file into a subdirectory dir of its own directory.",
            },
            OpCode::Clone => OpDoc {
                flag: "--clone",
                args: " existing new",
                short: "Add a copy of the file at existing, at path new.",
            },
            OpCode::Exclude => OpDoc {
                flag: "--exclude",
                args: " path",
                short: "Drop the file at path.",
            },
            OpCode::WithBaseName => OpDoc {
                flag: "--with-base-name",
                args: " name",
                short: "Keep only files whose name, minus extension, is name.",
            },
            OpCode::WithDirectory => OpDoc {
                flag: "--with-directory",
                args: " dir",
                short: "Keep only files directly inside dir.",
            },
            OpCode::WithExtension => OpDoc {
                flag: "--with-extension",
                args: " ext",
                short: "Keep only files with extension ext.",
            },
            OpCode::WithMetadata => OpDoc {
                flag: "--with-metadata",
                args: " key json",
                short: "Keep only files whose metadata has key set to the JSON value.",
            },
            OpCode::Matching => OpDoc {
                flag: "--matching",
                args: " pattern",
                short: "Keep only files whose path matches the regex pattern.",
            },
            OpCode::InsertMetadata => OpDoc {
                flag: "--insert-metadata",
                args: " json",
                short: "Merge a JSON object into every file's metadata.",
            },
            OpCode::ReplaceMetadata => OpDoc {
                flag: "--replace-metadata",
                args: " json",
                short: "Set every file's metadata to a JSON object.",
            },
            OpCode::ClearMetadata => OpDoc {
                flag: "--clear-metadata",
                args: "",
                short: "Remove all metadata.",
            },
            OpCode::CopyProps => OpDoc {
                flag: "--copy-props",
                args: "",
                short: "Record each file's path properties in its metadata.",
            },
            OpCode::SetContent => OpDoc {
                flag: "--set-content",
                args: " text",
                short: "Replace the contents of every file with text.",
            },
        }
    }
}

pub fn usage() -> String {
    let mut sections: Vec<&str> = vec![];
    sections.push("Usage: folio [--help|--version|--quiet] [op...]\n\n");
    sections.push("Each --list starts a new program. Programs run in order.\n\n");
    sections.push("Valid ops:\n\n");

    for oc in OpCode::iter() {
        let doc = oc.doc();
        sections.extend([
            doc.flag,
            ": ",
            doc.short,
            "\n    Usage: ",
            doc.flag,
            doc.args,
            "\n\n",
        ]);
    }
    sections.concat()
}
