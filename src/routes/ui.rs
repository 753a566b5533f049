use axum::{response::Html, routing::get, Router};

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// Each button calls one handler and writes the returned string into its
// read-only output box. The model status box starts at "尚未加载".
pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="zh-CN">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>ColBERT v2.0 WebUI</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; max-width: 960px; }
    h2 { margin-bottom: 0.5rem; }
    .row { display: flex; gap: 1rem; align-items: flex-end; margin-bottom: 1rem; }
    .row > div { flex: 1; }
    label { display: block; margin-top: 0.75rem; font-weight: 600; }
    input[type=text], textarea { width: 100%; padding: 0.5rem; box-sizing: border-box; }
    textarea[readonly] { background: #f6f8fa; }
    button { margin-top: 1rem; padding: 0.6rem 1rem; }
    button.primary { background: #ff7c00; color: #fff; border: none; border-radius: 4px; }
    .tabs { border-bottom: 1px solid #ddd; margin-top: 1rem; }
    .tabs button { margin: 0; border: none; background: none; border-bottom: 2px solid transparent; }
    .tabs button.active { border-bottom-color: #ff7c00; font-weight: 600; }
    .tab { display: none; padding-top: 0.5rem; }
    .tab.active { display: block; }
    footer { margin-top: 2rem; border-top: 1px solid #ddd; padding-top: 0.5rem; color: #666; }
  </style>
</head>
<body>
  <h2>ColBERT v2.0 · 晚期交互检索与可视化 WebUI 演示</h2>
  <p>本界面以交互方式展示 ColBERT v2.0 的典型使用流程：模型加载、语料索引状态、查询检索及结果可视化（演示模式，未加载真实模型）。</p>

  <div class="row">
    <button id="loadBtn" class="primary">加载模型（演示）</button>
    <div>
      <label for="modelStatus">模型状态</label>
      <input id="modelStatus" type="text" value="尚未加载" readonly />
    </div>
  </div>

  <div class="tabs">
    <button class="tab-btn active" data-tab="retrieveTab">检索</button>
    <button class="tab-btn" data-tab="indexTab">索引状态</button>
  </div>

  <div id="retrieveTab" class="tab active">
    <p>输入查询与 Top-K，模型将进行晚期交互检索并展示结果。</p>
    <label for="query">查询文本</label>
    <textarea id="query" rows="2" placeholder="例如：What is ColBERT late interaction?"></textarea>
    <label for="topK">Top-K: <span id="topKValue">10</span></label>
    <input id="topK" type="range" min="1" max="50" step="1" value="10" />
    <button id="retrieveBtn">检索（演示）</button>
    <label for="retrieveOut">检索结果说明</label>
    <textarea id="retrieveOut" rows="12" readonly></textarea>
  </div>

  <div id="indexTab" class="tab">
    <p>查看当前 ColBERT 索引状态（演示）。</p>
    <button id="indexBtn">查看索引状态</button>
    <label for="indexOut">索引状态</label>
    <textarea id="indexOut" rows="4" readonly></textarea>
  </div>

  <footer>
    <em>说明：当前为轻量级演示界面，未实际下载与加载 ColBERT v2.0 模型参数。</em>
  </footer>

  <script>
    const topK = document.getElementById('topK');
    const topKValue = document.getElementById('topKValue');
    topK.addEventListener('input', () => { topKValue.textContent = topK.value; });

    document.querySelectorAll('.tab-btn').forEach(btn => {
      btn.addEventListener('click', () => {
        document.querySelectorAll('.tab-btn').forEach(b => b.classList.remove('active'));
        document.querySelectorAll('.tab').forEach(t => t.classList.remove('active'));
        btn.classList.add('active');
        document.getElementById(btn.dataset.tab).classList.add('active');
      });
    });

    async function call(method, url, body) {
      const options = { method };
      if (body !== undefined) {
        options.headers = { 'Content-Type': 'application/json' };
        options.body = JSON.stringify(body);
      }
      const res = await fetch(url, options);
      const json = await res.json();
      if (!res.ok) {
        throw new Error(json.details || json.error || res.statusText);
      }
      return json;
    }

    document.getElementById('loadBtn').addEventListener('click', async () => {
      const json = await call('POST', '/api/model/load');
      document.getElementById('modelStatus').value = json.status;
    });

    document.getElementById('retrieveBtn').addEventListener('click', async () => {
      const out = document.getElementById('retrieveOut');
      try {
        const json = await call('POST', '/api/retrieve', {
          query: document.getElementById('query').value,
          top_k: Number(topK.value)
        });
        out.value = json.output;
      } catch (err) {
        out.value = String(err);
      }
    });

    document.getElementById('indexBtn').addEventListener('click', async () => {
      const json = await call('GET', '/api/index/status');
      document.getElementById('indexOut').value = json.status;
    });
  </script>
</body>
</html>"#;
